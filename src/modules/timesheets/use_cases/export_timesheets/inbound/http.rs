use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::header,
    response::{IntoResponse, Response},
};

use crate::modules::timesheets::use_cases::list_timesheets::inbound::http::FilterParams;
use crate::shared::auth::identity::Identity;
use crate::shared::core::errors::ApplicationError;
use crate::shell::errors::invalid_query;
use crate::shell::state::AppState;

pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

pub async fn handle(
    State(state): State<AppState>,
    identity: Identity,
    params: Result<Query<FilterParams>, QueryRejection>,
) -> Result<Response, ApplicationError> {
    identity.ensure_hr()?;
    let Query(params) = params.map_err(invalid_query)?;
    let export = state
        .export_timesheets
        .handle(&identity, params.to_filter()?)
        .await?;

    let disposition = format!("attachment; filename=\"{}\"", export.filename);
    Ok((
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.body,
    )
        .into_response())
}
