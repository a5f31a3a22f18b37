use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::modules::time_tracking::core::aggregation::{round_hours, sum_millis, whole_seconds};
use crate::modules::time_tracking::core::ports::TimeEntryRepository;
use crate::modules::timesheets::core::ports::TimesheetRepository;
use crate::modules::timesheets::core::timesheet::{
    TimesheetFilter, TimesheetListing, TimesheetStatus,
};
use crate::shared::auth::identity::Identity;
use crate::shared::core::clock::Clock;
use crate::shared::core::dates::DateRange;
use crate::shared::core::errors::ApplicationResult;

pub const LIST_LIMIT: usize = 200;

/// One line of the HR review queue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimesheetRow {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub employee_department: Option<String>,
    pub week_start: NaiveDate,
    pub status: TimesheetStatus,
    pub hr_note: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub decided_at: Option<DateTime<Utc>>,
    pub total_seconds: i64,
    pub total_hours: f64,
}

impl TimesheetRow {
    fn new(listing: TimesheetListing, week_millis: i64) -> Self {
        let timesheet = listing.timesheet;
        Self {
            id: timesheet.id,
            employee_id: timesheet.employee_id,
            employee_name: listing.employee_name,
            employee_department: listing.employee_department,
            week_start: timesheet.week_start,
            status: timesheet.status,
            hr_note: timesheet.hr_note,
            submitted_at: timesheet.submitted_at,
            decided_at: timesheet.decided_at,
            total_seconds: whole_seconds(week_millis),
            total_hours: round_hours(week_millis),
        }
    }
}

pub struct ListTimesheetsHandler {
    timesheets: Arc<dyn TimesheetRepository>,
    entries: Arc<dyn TimeEntryRepository>,
    clock: Arc<dyn Clock>,
}

impl ListTimesheetsHandler {
    pub fn new(
        timesheets: Arc<dyn TimesheetRepository>,
        entries: Arc<dyn TimeEntryRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            timesheets,
            entries,
            clock,
        }
    }

    pub async fn handle(
        &self,
        actor: &Identity,
        filter: TimesheetFilter,
    ) -> ApplicationResult<Vec<TimesheetRow>> {
        actor.ensure_hr()?;

        let now_ms = self.clock.now().timestamp_millis();
        let listings = self.timesheets.list_timesheets(filter, LIST_LIMIT).await?;

        let mut rows = Vec::with_capacity(listings.len());
        for listing in listings {
            let week = DateRange::week(listing.timesheet.week_start);
            let entries = self
                .entries
                .entries_in_range(listing.timesheet.employee_id, week)
                .await?;
            let week_millis = sum_millis(&entries, &week, now_ms);
            rows.push(TimesheetRow::new(listing, week_millis));
        }
        Ok(rows)
    }
}
