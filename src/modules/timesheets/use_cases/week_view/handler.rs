use chrono::NaiveDate;
use std::sync::Arc;

use crate::modules::employees::core::access::resolve_employee;
use crate::modules::employees::core::ports::EmployeeDirectory;
use crate::modules::time_tracking::core::ports::TimeEntryRepository;
use crate::modules::timesheets::core::ports::{TimesheetNoteRepository, TimesheetRepository};
use crate::modules::timesheets::core::week_view::{WeekView, build_week_view};
use crate::shared::auth::identity::Identity;
use crate::shared::core::clock::{Clock, WorkCalendar};
use crate::shared::core::dates::{DateRange, week_start};
use crate::shared::core::errors::ApplicationResult;

pub struct WeekViewHandler {
    employees: Arc<dyn EmployeeDirectory>,
    entries: Arc<dyn TimeEntryRepository>,
    timesheets: Arc<dyn TimesheetRepository>,
    notes: Arc<dyn TimesheetNoteRepository>,
    clock: Arc<dyn Clock>,
    calendar: WorkCalendar,
}

impl WeekViewHandler {
    pub fn new(
        employees: Arc<dyn EmployeeDirectory>,
        entries: Arc<dyn TimeEntryRepository>,
        timesheets: Arc<dyn TimesheetRepository>,
        notes: Arc<dyn TimesheetNoteRepository>,
        clock: Arc<dyn Clock>,
        calendar: WorkCalendar,
    ) -> Self {
        Self {
            employees,
            entries,
            timesheets,
            notes,
            clock,
            calendar,
        }
    }

    /// Any date inside the week selects it. Without a date, the current week.
    pub async fn handle(
        &self,
        actor: &Identity,
        employee_id: i64,
        week_of: Option<NaiveDate>,
    ) -> ApplicationResult<WeekView> {
        resolve_employee(&*self.employees, actor, employee_id).await?;

        let now = self.clock.now();
        let monday = week_start(week_of.unwrap_or_else(|| self.calendar.local_date(now)));
        let range = DateRange::week(monday);

        let timesheet = self.timesheets.find_timesheet(employee_id, monday).await?;
        let entries = self.entries.entries_in_range(employee_id, range).await?;
        let notes = self.notes.notes_in_range(employee_id, range).await?;

        Ok(build_week_view(
            monday,
            timesheet.as_ref(),
            &entries,
            &notes,
            now.timestamp_millis(),
        ))
    }
}
