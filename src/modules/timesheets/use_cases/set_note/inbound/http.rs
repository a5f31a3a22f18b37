use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use serde::Deserialize;

use crate::modules::timesheets::core::timesheet::TimesheetNote;
use crate::shared::auth::identity::Identity;
use crate::shared::core::dates::require_date;
use crate::shared::core::errors::ApplicationError;
use crate::shell::errors::{invalid_body, invalid_path};
use crate::shell::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SetNoteBody {
    pub work_date: String,
    #[serde(default)]
    pub note: String,
}

pub async fn handle(
    State(state): State<AppState>,
    identity: Identity,
    employee_id: Result<Path<i64>, PathRejection>,
    body: Result<Json<SetNoteBody>, JsonRejection>,
) -> Result<Json<TimesheetNote>, ApplicationError> {
    let Path(employee_id) = employee_id.map_err(invalid_path)?;
    let Json(body) = body.map_err(invalid_body)?;
    let work_date = require_date("work_date", &body.work_date)?;

    let note = state
        .set_note
        .handle(&identity, employee_id, work_date, body.note)
        .await?;
    Ok(Json(note))
}
