use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::modules::time_tracking::use_cases::start_shift::handler::StartShiftOutcome;
use crate::shared::auth::identity::Identity;
use crate::shared::core::errors::ApplicationError;
use crate::shell::errors::invalid_path;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    identity: Identity,
    employee_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<StartShiftOutcome>, ApplicationError> {
    let Path(employee_id) = employee_id.map_err(invalid_path)?;
    let outcome = state.start_shift.handle(&identity, employee_id).await?;
    Ok(Json(outcome))
}
