// GraphQL surface of the timesheet lifecycle.
//
// Dates travel as "YYYY-MM-DD" strings and instants as RFC 3339 strings, the
// same shapes the JSON API uses.

use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use chrono::{DateTime, SecondsFormat, Utc};

use crate::modules::timesheets::core::timesheet::{Timesheet, TimesheetFilter, TimesheetNote};
use crate::modules::timesheets::core::week_view::{DayView, WeekView};
use crate::modules::timesheets::use_cases::decide_timesheet::handler::parse_decision;
use crate::modules::timesheets::use_cases::list_timesheets::handler::TimesheetRow;
use crate::shared::core::dates::{format_date, require_date};
use crate::shell::graphql::{caller, gql_error};

fn instant(at: Option<DateTime<Utc>>) -> Option<String> {
    at.map(|at| at.to_rfc3339_opts(SecondsFormat::Secs, true))
}

#[derive(SimpleObject, Clone)]
pub struct GqlDay {
    pub date: String,
    pub hours: f64,
    pub worked_seconds: i64,
    pub open: bool,
    pub open_entries: i64,
    pub note: Option<String>,
}

impl From<DayView> for GqlDay {
    fn from(d: DayView) -> Self {
        Self {
            date: format_date(d.date),
            hours: d.hours,
            worked_seconds: d.worked_seconds,
            open: d.open,
            open_entries: d.open_entries as i64,
            note: d.note,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlWeek {
    pub week_start: String,
    pub timesheet_id: Option<i64>,
    pub status: String,
    pub hr_note: Option<String>,
    pub total_hours: f64,
    pub total_seconds: i64,
    pub open_entry_count: i64,
    pub days: Vec<GqlDay>,
}

impl From<WeekView> for GqlWeek {
    fn from(w: WeekView) -> Self {
        Self {
            week_start: format_date(w.week_start),
            timesheet_id: w.timesheet_id,
            status: w.status.as_str().to_string(),
            hr_note: w.hr_note,
            total_hours: w.total_hours,
            total_seconds: w.total_seconds,
            open_entry_count: w.open_entry_count as i64,
            days: w.days.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlTimesheet {
    pub id: i64,
    pub employee_id: i64,
    pub week_start: String,
    pub status: String,
    pub hr_note: Option<String>,
    pub submitted_at: Option<String>,
    pub decided_at: Option<String>,
}

impl From<Timesheet> for GqlTimesheet {
    fn from(t: Timesheet) -> Self {
        Self {
            id: t.id,
            employee_id: t.employee_id,
            week_start: format_date(t.week_start),
            status: t.status.as_str().to_string(),
            hr_note: t.hr_note,
            submitted_at: instant(t.submitted_at),
            decided_at: instant(t.decided_at),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlTimesheetRow {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub employee_department: Option<String>,
    pub week_start: String,
    pub status: String,
    pub hr_note: Option<String>,
    pub submitted_at: Option<String>,
    pub decided_at: Option<String>,
    pub total_seconds: i64,
    pub total_hours: f64,
}

impl From<TimesheetRow> for GqlTimesheetRow {
    fn from(r: TimesheetRow) -> Self {
        Self {
            id: r.id,
            employee_id: r.employee_id,
            employee_name: r.employee_name,
            employee_department: r.employee_department,
            week_start: format_date(r.week_start),
            status: r.status.as_str().to_string(),
            hr_note: r.hr_note,
            submitted_at: instant(r.submitted_at),
            decided_at: instant(r.decided_at),
            total_seconds: r.total_seconds,
            total_hours: r.total_hours,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlNote {
    pub employee_id: i64,
    pub work_date: String,
    pub note: String,
}

impl From<TimesheetNote> for GqlNote {
    fn from(n: TimesheetNote) -> Self {
        Self {
            employee_id: n.employee_id,
            work_date: format_date(n.work_date),
            note: n.note,
        }
    }
}

#[derive(Default)]
pub struct TimesheetsQuery;

#[Object]
impl TimesheetsQuery {
    async fn week_view(
        &self,
        context: &Context<'_>,
        employee_id: i64,
        week_start: Option<String>,
    ) -> GqlResult<GqlWeek> {
        let (state, actor) = caller(context)?;
        let week_of = week_start
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .map(|value| require_date("week_start", value))
            .transpose()
            .map_err(gql_error)?;
        let view = state
            .week_view
            .handle(actor, employee_id, week_of)
            .await
            .map_err(gql_error)?;
        Ok(view.into())
    }

    /// HR review queue, newest submissions first.
    async fn timesheets(
        &self,
        context: &Context<'_>,
        week_start: Option<String>,
        status: Option<String>,
    ) -> GqlResult<Vec<GqlTimesheetRow>> {
        let (state, actor) = caller(context)?;
        actor.ensure_hr().map_err(gql_error)?;
        let filter = TimesheetFilter::parse(week_start.as_deref(), status.as_deref())
            .map_err(gql_error)?;
        let rows = state
            .list_timesheets
            .handle(actor, filter)
            .await
            .map_err(gql_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[derive(Default)]
pub struct TimesheetsMutation;

#[Object]
impl TimesheetsMutation {
    async fn set_note(
        &self,
        context: &Context<'_>,
        employee_id: i64,
        work_date: String,
        note: String,
    ) -> GqlResult<GqlNote> {
        let (state, actor) = caller(context)?;
        let work_date = require_date("work_date", &work_date).map_err(gql_error)?;
        let note = state
            .set_note
            .handle(actor, employee_id, work_date, note)
            .await
            .map_err(gql_error)?;
        Ok(note.into())
    }

    async fn submit_timesheet(
        &self,
        context: &Context<'_>,
        employee_id: i64,
        week_start: String,
    ) -> GqlResult<GqlTimesheet> {
        let (state, actor) = caller(context)?;
        let week_of = require_date("week_start", &week_start).map_err(gql_error)?;
        let timesheet = state
            .submit_timesheet
            .handle(actor, employee_id, week_of)
            .await
            .map_err(gql_error)?;
        Ok(timesheet.into())
    }

    async fn decide_timesheet(
        &self,
        context: &Context<'_>,
        timesheet_id: i64,
        decision: String,
        hr_note: Option<String>,
    ) -> GqlResult<GqlTimesheet> {
        let (state, actor) = caller(context)?;
        let decision = parse_decision(&decision).map_err(gql_error)?;
        let timesheet = state
            .decide_timesheet
            .handle(actor, timesheet_id, decision, hr_note)
            .await
            .map_err(gql_error)?;
        Ok(timesheet.into())
    }
}
