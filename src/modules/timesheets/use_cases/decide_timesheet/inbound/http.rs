use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use serde::Deserialize;

use crate::modules::timesheets::core::timesheet::Timesheet;
use crate::modules::timesheets::use_cases::decide_timesheet::handler::parse_decision;
use crate::shared::auth::identity::Identity;
use crate::shared::core::errors::ApplicationError;
use crate::shell::errors::{invalid_body, invalid_path};
use crate::shell::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DecisionBody {
    pub decision: String,
    pub hr_note: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    identity: Identity,
    timesheet_id: Result<Path<i64>, PathRejection>,
    body: Result<Json<DecisionBody>, JsonRejection>,
) -> Result<Json<Timesheet>, ApplicationError> {
    let Path(timesheet_id) = timesheet_id.map_err(invalid_path)?;
    let Json(body) = body.map_err(invalid_body)?;
    let decision = parse_decision(&body.decision)?;

    let timesheet = state
        .decide_timesheet
        .handle(&identity, timesheet_id, decision, body.hr_note)
        .await?;
    Ok(Json(timesheet))
}
