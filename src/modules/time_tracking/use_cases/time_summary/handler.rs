use std::sync::Arc;

use crate::modules::employees::core::access::resolve_employee;
use crate::modules::employees::core::ports::EmployeeDirectory;
use crate::modules::time_tracking::core::aggregation::{TimeSummary, count_open, sum_millis};
use crate::modules::time_tracking::core::ports::TimeEntryRepository;
use crate::shared::auth::identity::Identity;
use crate::shared::core::clock::{Clock, WorkCalendar};
use crate::shared::core::dates::{DateRange, week_start};
use crate::shared::core::errors::ApplicationResult;

pub struct TimeSummaryHandler {
    employees: Arc<dyn EmployeeDirectory>,
    entries: Arc<dyn TimeEntryRepository>,
    clock: Arc<dyn Clock>,
    calendar: WorkCalendar,
}

impl TimeSummaryHandler {
    pub fn new(
        employees: Arc<dyn EmployeeDirectory>,
        entries: Arc<dyn TimeEntryRepository>,
        clock: Arc<dyn Clock>,
        calendar: WorkCalendar,
    ) -> Self {
        Self {
            employees,
            entries,
            clock,
            calendar,
        }
    }

    /// Today, this week and all time, each recomputed from the entries.
    pub async fn handle(&self, actor: &Identity, employee_id: i64) -> ApplicationResult<TimeSummary> {
        resolve_employee(&*self.employees, actor, employee_id).await?;

        let now = self.clock.now();
        let now_ms = now.timestamp_millis();
        let today = self.calendar.local_date(now);

        let entries = self
            .entries
            .entries_in_range(employee_id, DateRange::all_time())
            .await?;

        Ok(TimeSummary::from_millis(
            count_open(&entries, today) > 0,
            sum_millis(&entries, &DateRange::day(today), now_ms),
            sum_millis(&entries, &DateRange::week(week_start(today)), now_ms),
            sum_millis(&entries, &DateRange::all_time(), now_ms),
        ))
    }
}
