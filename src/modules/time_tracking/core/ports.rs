// Ports for time tracking.
//
// Responsibilities
// - Keep the use cases independent of SQLite by coding against this trait.
// - insert_open_entry must refuse a second open entry for the same employee and
//   work date with RepositoryError::Conflict, even under concurrent callers.
// - close_entry only closes an entry that is still open and reports whether it did.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::modules::time_tracking::core::time_entry::{NewTimeEntry, TimeEntry};
use crate::shared::core::dates::DateRange;
use crate::shared::core::errors::RepositoryError;

#[async_trait]
pub trait TimeEntryRepository: Send + Sync {
    /// The most recently started open entry for that day, if any.
    async fn find_open_entry(
        &self,
        employee_id: i64,
        work_date: NaiveDate,
    ) -> Result<Option<TimeEntry>, RepositoryError>;

    async fn insert_open_entry(&self, entry: NewTimeEntry) -> Result<TimeEntry, RepositoryError>;

    async fn close_entry(&self, entry_id: i64, end_ms: i64) -> Result<bool, RepositoryError>;

    async fn entries_in_range(
        &self,
        employee_id: i64,
        range: DateRange,
    ) -> Result<Vec<TimeEntry>, RepositoryError>;
}
