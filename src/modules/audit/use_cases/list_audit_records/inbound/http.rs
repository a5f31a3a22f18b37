use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;

use crate::modules::audit::core::audit_record::AuditRecord;
use crate::shared::auth::identity::Identity;
use crate::shared::core::errors::ApplicationError;
use crate::shell::errors::invalid_query;
use crate::shell::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AuditParams {
    pub limit: Option<usize>,
}

pub async fn handle(
    State(state): State<AppState>,
    identity: Identity,
    params: Result<Query<AuditParams>, QueryRejection>,
) -> Result<Json<Vec<AuditRecord>>, ApplicationError> {
    let Query(params) = params.map_err(invalid_query)?;
    let records = state
        .list_audit_records
        .handle(&identity, params.limit)
        .await?;
    Ok(Json(records))
}
