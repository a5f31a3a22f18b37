// SQLite adapter for time entries.
//
// The partial unique index idx_time_entries_single_open turns a concurrent
// second start into a constraint violation, surfaced as RepositoryError::Conflict.

use async_trait::async_trait;
use chrono::NaiveDate;
use rusqlite::{OptionalExtension, Row, params};

use crate::modules::time_tracking::core::ports::TimeEntryRepository;
use crate::modules::time_tracking::core::time_entry::{NewTimeEntry, TimeEntry};
use crate::shared::core::dates::DateRange;
use crate::shared::core::errors::RepositoryError;
use crate::shared::infrastructure::sqlite::SqliteDatabase;

const SELECT_ENTRY: &str = "SELECT id, employee_id, start_ms, end_ms, work_date FROM time_entries";

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<TimeEntry> {
    Ok(TimeEntry {
        id: row.get(0)?,
        employee_id: row.get(1)?,
        start_ms: row.get(2)?,
        end_ms: row.get(3)?,
        work_date: row.get(4)?,
    })
}

#[async_trait]
impl TimeEntryRepository for SqliteDatabase {
    async fn find_open_entry(
        &self,
        employee_id: i64,
        work_date: NaiveDate,
    ) -> Result<Option<TimeEntry>, RepositoryError> {
        self.with_conn(|conn| {
            conn.query_row(
                &format!(
                    "{SELECT_ENTRY} WHERE employee_id = ?1 AND work_date = ?2 AND end_ms IS NULL \
                     ORDER BY start_ms DESC, id DESC LIMIT 1"
                ),
                params![employee_id, work_date],
                entry_from_row,
            )
            .optional()
        })
        .await
    }

    async fn insert_open_entry(&self, entry: NewTimeEntry) -> Result<TimeEntry, RepositoryError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO time_entries (employee_id, start_ms, end_ms, work_date) \
                 VALUES (?1, ?2, NULL, ?3)",
                params![entry.employee_id, entry.start_ms, entry.work_date],
            )?;
            Ok(TimeEntry {
                id: conn.last_insert_rowid(),
                employee_id: entry.employee_id,
                start_ms: entry.start_ms,
                end_ms: None,
                work_date: entry.work_date,
            })
        })
        .await
    }

    async fn close_entry(&self, entry_id: i64, end_ms: i64) -> Result<bool, RepositoryError> {
        let changed = self
            .with_conn(|conn| {
                conn.execute(
                    "UPDATE time_entries SET end_ms = ?1 WHERE id = ?2 AND end_ms IS NULL",
                    params![end_ms, entry_id],
                )
            })
            .await?;
        Ok(changed == 1)
    }

    async fn entries_in_range(
        &self,
        employee_id: i64,
        range: DateRange,
    ) -> Result<Vec<TimeEntry>, RepositoryError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "{SELECT_ENTRY} WHERE employee_id = ?1 \
                 AND (?2 IS NULL OR work_date >= ?2) \
                 AND (?3 IS NULL OR work_date < ?3) \
                 ORDER BY start_ms, id"
            ))?;
            let rows = stmt.query_map(params![employee_id, range.from, range.until], entry_from_row)?;
            rows.collect()
        })
        .await
    }
}
