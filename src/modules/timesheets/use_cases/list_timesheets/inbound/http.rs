use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;

use crate::modules::timesheets::core::timesheet::TimesheetFilter;
use crate::modules::timesheets::use_cases::list_timesheets::handler::TimesheetRow;
use crate::shared::auth::identity::Identity;
use crate::shared::core::errors::ApplicationError;
use crate::shell::errors::invalid_query;
use crate::shell::state::AppState;

/// Query string shared by the listing and the CSV export.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    pub week_start: Option<String>,
    pub status: Option<String>,
}

impl FilterParams {
    pub fn to_filter(&self) -> Result<TimesheetFilter, ApplicationError> {
        TimesheetFilter::parse(self.week_start.as_deref(), self.status.as_deref())
    }
}

pub async fn handle(
    State(state): State<AppState>,
    identity: Identity,
    params: Result<Query<FilterParams>, QueryRejection>,
) -> Result<Json<Vec<TimesheetRow>>, ApplicationError> {
    identity.ensure_hr()?;
    let Query(params) = params.map_err(invalid_query)?;
    let rows = state
        .list_timesheets
        .handle(&identity, params.to_filter()?)
        .await?;
    Ok(Json(rows))
}
