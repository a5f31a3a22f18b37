use async_trait::async_trait;
use chrono::NaiveDate;

use crate::modules::time_tracking::core::ports::TimeEntryRepository;
use crate::modules::time_tracking::core::time_entry::{NewTimeEntry, TimeEntry};
use crate::shared::core::dates::DateRange;
use crate::shared::core::errors::RepositoryError;
use crate::shared::infrastructure::in_memory::InMemoryDatabase;

#[async_trait]
impl TimeEntryRepository for InMemoryDatabase {
    async fn find_open_entry(
        &self,
        employee_id: i64,
        work_date: NaiveDate,
    ) -> Result<Option<TimeEntry>, RepositoryError> {
        let tables = self.read().await?;
        Ok(tables
            .time_entries
            .values()
            .filter(|e| e.employee_id == employee_id && e.work_date == work_date && e.is_open())
            .max_by_key(|e| (e.start_ms, e.id))
            .cloned())
    }

    async fn insert_open_entry(&self, entry: NewTimeEntry) -> Result<TimeEntry, RepositoryError> {
        let mut tables = self.write().await?;
        let already_open = tables.time_entries.values().any(|e| {
            e.employee_id == entry.employee_id && e.work_date == entry.work_date && e.is_open()
        });
        if already_open {
            return Err(RepositoryError::Conflict(format!(
                "open entry exists for employee {} on {}",
                entry.employee_id, entry.work_date
            )));
        }
        if !tables.employees.contains_key(&entry.employee_id) {
            return Err(RepositoryError::Conflict(format!(
                "unknown employee {}",
                entry.employee_id
            )));
        }
        let id = tables.next_id();
        let stored = TimeEntry {
            id,
            employee_id: entry.employee_id,
            start_ms: entry.start_ms,
            end_ms: None,
            work_date: entry.work_date,
        };
        tables.time_entries.insert(id, stored.clone());
        Ok(stored)
    }

    async fn close_entry(&self, entry_id: i64, end_ms: i64) -> Result<bool, RepositoryError> {
        let mut tables = self.write().await?;
        match tables.time_entries.get_mut(&entry_id) {
            Some(entry) if entry.is_open() => {
                entry.end_ms = Some(end_ms);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn entries_in_range(
        &self,
        employee_id: i64,
        range: DateRange,
    ) -> Result<Vec<TimeEntry>, RepositoryError> {
        let tables = self.read().await?;
        let mut entries: Vec<TimeEntry> = tables
            .time_entries
            .values()
            .filter(|e| e.employee_id == employee_id && range.contains(e.work_date))
            .cloned()
            .collect();
        entries.sort_by_key(|e| (e.start_ms, e.id));
        Ok(entries)
    }
}
