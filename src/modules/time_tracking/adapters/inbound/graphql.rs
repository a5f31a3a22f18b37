use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::time_tracking::core::aggregation::TimeSummary;
use crate::modules::time_tracking::use_cases::start_shift::handler::StartShiftOutcome;
use crate::modules::time_tracking::use_cases::stop_shift::handler::StopShiftOutcome;
use crate::shell::graphql::{caller, gql_error};

#[derive(SimpleObject, Clone)]
pub struct GqlTimeSummary {
    pub running: bool,
    pub today_hours: f64,
    pub week_hours: f64,
    pub total_hours: f64,
    pub today_seconds: i64,
    pub week_seconds: i64,
    pub total_seconds: i64,
}

impl From<TimeSummary> for GqlTimeSummary {
    fn from(s: TimeSummary) -> Self {
        Self {
            running: s.running,
            today_hours: s.today_hours,
            week_hours: s.week_hours,
            total_hours: s.total_hours,
            today_seconds: s.today_seconds,
            week_seconds: s.week_seconds,
            total_seconds: s.total_seconds,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlStartShift {
    pub started: bool,
    pub already_running: bool,
    pub entry_id: Option<i64>,
}

impl From<StartShiftOutcome> for GqlStartShift {
    fn from(o: StartShiftOutcome) -> Self {
        Self {
            started: o.started,
            already_running: o.already_running,
            entry_id: o.entry_id,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlStopShift {
    pub stopped: bool,
    pub not_running: bool,
    pub entry_id: Option<i64>,
}

impl From<StopShiftOutcome> for GqlStopShift {
    fn from(o: StopShiftOutcome) -> Self {
        Self {
            stopped: o.stopped,
            not_running: o.not_running,
            entry_id: o.entry_id,
        }
    }
}

#[derive(Default)]
pub struct TimeTrackingQuery;

#[Object]
impl TimeTrackingQuery {
    async fn time_summary(&self, context: &Context<'_>, employee_id: i64) -> GqlResult<GqlTimeSummary> {
        let (state, actor) = caller(context)?;
        let summary = state
            .time_summary
            .handle(actor, employee_id)
            .await
            .map_err(gql_error)?;
        Ok(summary.into())
    }
}

#[derive(Default)]
pub struct TimeTrackingMutation;

#[Object]
impl TimeTrackingMutation {
    async fn start_shift(&self, context: &Context<'_>, employee_id: i64) -> GqlResult<GqlStartShift> {
        let (state, actor) = caller(context)?;
        let outcome = state
            .start_shift
            .handle(actor, employee_id)
            .await
            .map_err(gql_error)?;
        Ok(outcome.into())
    }

    async fn stop_shift(&self, context: &Context<'_>, employee_id: i64) -> GqlResult<GqlStopShift> {
        let (state, actor) = caller(context)?;
        let outcome = state
            .stop_shift
            .handle(actor, employee_id)
            .await
            .map_err(gql_error)?;
        Ok(outcome.into())
    }
}
