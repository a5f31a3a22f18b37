use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use std::cmp::Reverse;

use crate::modules::timesheets::core::ports::{TimesheetNoteRepository, TimesheetRepository};
use crate::modules::timesheets::core::timesheet::{
    Timesheet, TimesheetFilter, TimesheetListing, TimesheetNote, TimesheetStatus,
};
use crate::shared::core::dates::DateRange;
use crate::shared::core::errors::RepositoryError;
use crate::shared::infrastructure::in_memory::InMemoryDatabase;

#[async_trait]
impl TimesheetRepository for InMemoryDatabase {
    async fn find_timesheet(
        &self,
        employee_id: i64,
        week_start: NaiveDate,
    ) -> Result<Option<Timesheet>, RepositoryError> {
        let tables = self.read().await?;
        Ok(tables
            .timesheets
            .values()
            .find(|t| t.employee_id == employee_id && t.week_start == week_start)
            .cloned())
    }

    async fn save_submission(
        &self,
        employee_id: i64,
        week_start: NaiveDate,
        submitted_at: DateTime<Utc>,
    ) -> Result<Option<Timesheet>, RepositoryError> {
        let mut tables = self.write().await?;
        if let Some(existing) = tables
            .timesheets
            .values_mut()
            .find(|t| t.employee_id == employee_id && t.week_start == week_start)
        {
            if existing.status == TimesheetStatus::Approved {
                return Ok(None);
            }
            existing.status = TimesheetStatus::Submitted;
            existing.submitted_at = Some(submitted_at);
            return Ok(Some(existing.clone()));
        }
        if !tables.employees.contains_key(&employee_id) {
            return Err(RepositoryError::Conflict(format!(
                "unknown employee {employee_id}"
            )));
        }
        let id = tables.next_id();
        let timesheet = Timesheet {
            id,
            employee_id,
            week_start,
            status: TimesheetStatus::Submitted,
            hr_note: None,
            submitted_at: Some(submitted_at),
            decided_at: None,
        };
        tables.timesheets.insert(id, timesheet.clone());
        Ok(Some(timesheet))
    }

    async fn save_review(
        &self,
        id: i64,
        status: TimesheetStatus,
        hr_note: Option<String>,
        decided_at: DateTime<Utc>,
    ) -> Result<Option<Timesheet>, RepositoryError> {
        let mut tables = self.write().await?;
        Ok(tables.timesheets.get_mut(&id).map(|timesheet| {
            timesheet.status = status;
            timesheet.hr_note = hr_note;
            timesheet.decided_at = Some(decided_at);
            timesheet.clone()
        }))
    }

    async fn list_timesheets(
        &self,
        filter: TimesheetFilter,
        limit: usize,
    ) -> Result<Vec<TimesheetListing>, RepositoryError> {
        let tables = self.read().await?;
        let mut listings: Vec<TimesheetListing> = tables
            .timesheets
            .values()
            .filter(|t| filter.matches(t))
            .filter_map(|t| {
                tables.employees.get(&t.employee_id).map(|employee| TimesheetListing {
                    timesheet: t.clone(),
                    employee_name: employee.name.clone(),
                    employee_department: employee.department.clone(),
                })
            })
            .collect();
        listings.sort_by_key(|l| Reverse((l.timesheet.submitted_at, l.timesheet.id)));
        listings.truncate(limit);
        Ok(listings)
    }
}

#[async_trait]
impl TimesheetNoteRepository for InMemoryDatabase {
    async fn upsert_note(&self, note: TimesheetNote) -> Result<(), RepositoryError> {
        let mut tables = self.write().await?;
        if !tables.employees.contains_key(&note.employee_id) {
            return Err(RepositoryError::Conflict(format!(
                "unknown employee {}",
                note.employee_id
            )));
        }
        tables
            .notes
            .insert((note.employee_id, note.work_date), note);
        Ok(())
    }

    async fn notes_in_range(
        &self,
        employee_id: i64,
        range: DateRange,
    ) -> Result<Vec<TimesheetNote>, RepositoryError> {
        let tables = self.read().await?;
        Ok(tables
            .notes
            .values()
            .filter(|n| n.employee_id == employee_id && range.contains(n.work_date))
            .cloned()
            .collect())
    }
}
