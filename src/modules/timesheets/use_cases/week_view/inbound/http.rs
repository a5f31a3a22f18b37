use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};
use serde::Deserialize;

use crate::modules::timesheets::core::week_view::WeekView;
use crate::shared::auth::identity::Identity;
use crate::shared::core::dates::require_date;
use crate::shared::core::errors::ApplicationError;
use crate::shell::errors::{invalid_path, invalid_query};
use crate::shell::state::AppState;

#[derive(Debug, Deserialize)]
pub struct WeekParams {
    pub week_start: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    identity: Identity,
    employee_id: Result<Path<i64>, PathRejection>,
    params: Result<Query<WeekParams>, QueryRejection>,
) -> Result<Json<WeekView>, ApplicationError> {
    let Path(employee_id) = employee_id.map_err(invalid_path)?;
    let Query(params) = params.map_err(invalid_query)?;
    let week_of = params
        .week_start
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .map(|value| require_date("week_start", value))
        .transpose()?;

    let view = state.week_view.handle(&identity, employee_id, week_of).await?;
    Ok(Json(view))
}
