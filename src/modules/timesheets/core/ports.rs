// Ports for the timesheet lifecycle and daily notes.
//
// Responsibilities
// - save_submission inserts the week's row on first submit and otherwise updates
//   it in place; (employee_id, week_start) stays unique. It returns None, and
//   writes nothing, when the stored week is already approved. The check and
//   the write happen as one step.
// - save_review returns None when no timesheet has that id.
// - list_timesheets returns newest submissions first, capped at `limit`.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::modules::timesheets::core::timesheet::{
    Timesheet, TimesheetFilter, TimesheetListing, TimesheetNote, TimesheetStatus,
};
use crate::shared::core::dates::DateRange;
use crate::shared::core::errors::RepositoryError;

#[async_trait]
pub trait TimesheetRepository: Send + Sync {
    async fn find_timesheet(
        &self,
        employee_id: i64,
        week_start: NaiveDate,
    ) -> Result<Option<Timesheet>, RepositoryError>;

    async fn save_submission(
        &self,
        employee_id: i64,
        week_start: NaiveDate,
        submitted_at: DateTime<Utc>,
    ) -> Result<Option<Timesheet>, RepositoryError>;

    async fn save_review(
        &self,
        id: i64,
        status: TimesheetStatus,
        hr_note: Option<String>,
        decided_at: DateTime<Utc>,
    ) -> Result<Option<Timesheet>, RepositoryError>;

    async fn list_timesheets(
        &self,
        filter: TimesheetFilter,
        limit: usize,
    ) -> Result<Vec<TimesheetListing>, RepositoryError>;
}

#[async_trait]
pub trait TimesheetNoteRepository: Send + Sync {
    async fn upsert_note(&self, note: TimesheetNote) -> Result<(), RepositoryError>;

    async fn notes_in_range(
        &self,
        employee_id: i64,
        range: DateRange,
    ) -> Result<Vec<TimesheetNote>, RepositoryError>;
}
