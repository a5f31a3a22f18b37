use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::types::Type;
use rusqlite::{OptionalExtension, Row, params};

use crate::modules::timesheets::core::ports::{TimesheetNoteRepository, TimesheetRepository};
use crate::modules::timesheets::core::timesheet::{
    Timesheet, TimesheetFilter, TimesheetListing, TimesheetNote, TimesheetStatus,
};
use crate::shared::core::dates::DateRange;
use crate::shared::core::errors::RepositoryError;
use crate::shared::infrastructure::sqlite::{SqliteDatabase, instant_from_millis};

const SELECT_TIMESHEET: &str = "SELECT t.id, t.employee_id, t.week_start, t.status, t.hr_note, \
     t.submitted_at_ms, t.decided_at_ms FROM timesheets t";

fn timesheet_from_row(row: &Row<'_>) -> rusqlite::Result<Timesheet> {
    let status: String = row.get(3)?;
    let status = status.parse::<TimesheetStatus>().map_err(|message| {
        rusqlite::Error::FromSqlConversionFailure(3, Type::Text, message.into())
    })?;
    Ok(Timesheet {
        id: row.get(0)?,
        employee_id: row.get(1)?,
        week_start: row.get(2)?,
        status,
        hr_note: row.get(4)?,
        submitted_at: row.get::<_, Option<i64>>(5)?.map(instant_from_millis),
        decided_at: row.get::<_, Option<i64>>(6)?.map(instant_from_millis),
    })
}

fn find_by_id(conn: &rusqlite::Connection, id: i64) -> rusqlite::Result<Option<Timesheet>> {
    conn.query_row(
        &format!("{SELECT_TIMESHEET} WHERE t.id = ?1"),
        params![id],
        timesheet_from_row,
    )
    .optional()
}

#[async_trait]
impl TimesheetRepository for SqliteDatabase {
    async fn find_timesheet(
        &self,
        employee_id: i64,
        week_start: NaiveDate,
    ) -> Result<Option<Timesheet>, RepositoryError> {
        self.with_conn(|conn| {
            conn.query_row(
                &format!("{SELECT_TIMESHEET} WHERE t.employee_id = ?1 AND t.week_start = ?2"),
                params![employee_id, week_start],
                timesheet_from_row,
            )
            .optional()
        })
        .await
    }

    async fn save_submission(
        &self,
        employee_id: i64,
        week_start: NaiveDate,
        submitted_at: DateTime<Utc>,
    ) -> Result<Option<Timesheet>, RepositoryError> {
        self.with_conn(|conn| {
            let id: Option<i64> = conn
                .query_row(
                    "INSERT INTO timesheets (employee_id, week_start, status, submitted_at_ms) \
                     VALUES (?1, ?2, 'submitted', ?3) \
                     ON CONFLICT(employee_id, week_start) DO UPDATE SET \
                         status = 'submitted', submitted_at_ms = excluded.submitted_at_ms \
                     WHERE timesheets.status <> 'approved' \
                     RETURNING id",
                    params![employee_id, week_start, submitted_at.timestamp_millis()],
                    |row| row.get(0),
                )
                .optional()?;
            match id {
                Some(id) => find_by_id(conn, id),
                None => Ok(None),
            }
        })
        .await
    }

    async fn save_review(
        &self,
        id: i64,
        status: TimesheetStatus,
        hr_note: Option<String>,
        decided_at: DateTime<Utc>,
    ) -> Result<Option<Timesheet>, RepositoryError> {
        self.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE timesheets SET status = ?1, hr_note = ?2, decided_at_ms = ?3 WHERE id = ?4",
                params![status.as_str(), hr_note, decided_at.timestamp_millis(), id],
            )?;
            if changed == 0 {
                return Ok(None);
            }
            find_by_id(conn, id)
        })
        .await
    }

    async fn list_timesheets(
        &self,
        filter: TimesheetFilter,
        limit: usize,
    ) -> Result<Vec<TimesheetListing>, RepositoryError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT t.id, t.employee_id, t.week_start, t.status, t.hr_note, \
                        t.submitted_at_ms, t.decided_at_ms, e.name, e.department \
                 FROM timesheets t JOIN employees e ON e.id = t.employee_id \
                 WHERE (?1 IS NULL OR t.week_start = ?1) AND (?2 IS NULL OR t.status = ?2) \
                 ORDER BY t.submitted_at_ms DESC, t.id DESC \
                 LIMIT ?3",
            )?;
            let rows = stmt.query_map(
                params![
                    filter.week_start,
                    filter.status.map(|s| s.as_str()),
                    limit
                ],
                |row| {
                    Ok(TimesheetListing {
                        timesheet: timesheet_from_row(row)?,
                        employee_name: row.get(7)?,
                        employee_department: row.get(8)?,
                    })
                },
            )?;
            rows.collect()
        })
        .await
    }
}

#[async_trait]
impl TimesheetNoteRepository for SqliteDatabase {
    async fn upsert_note(&self, note: TimesheetNote) -> Result<(), RepositoryError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO timesheet_notes (employee_id, work_date, note, updated_at_ms) \
                 VALUES (?1, ?2, ?3, ?4) \
                 ON CONFLICT(employee_id, work_date) DO UPDATE SET \
                     note = excluded.note, updated_at_ms = excluded.updated_at_ms",
                params![
                    note.employee_id,
                    note.work_date,
                    note.note,
                    note.updated_at.timestamp_millis()
                ],
            )
        })
        .await?;
        Ok(())
    }

    async fn notes_in_range(
        &self,
        employee_id: i64,
        range: DateRange,
    ) -> Result<Vec<TimesheetNote>, RepositoryError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT employee_id, work_date, note, updated_at_ms FROM timesheet_notes \
                 WHERE employee_id = ?1 \
                 AND (?2 IS NULL OR work_date >= ?2) \
                 AND (?3 IS NULL OR work_date < ?3) \
                 ORDER BY work_date",
            )?;
            let rows = stmt.query_map(params![employee_id, range.from, range.until], |row| {
                Ok(TimesheetNote {
                    employee_id: row.get(0)?,
                    work_date: row.get(1)?,
                    note: row.get(2)?,
                    updated_at: instant_from_millis(row.get(3)?),
                })
            })?;
            rows.collect()
        })
        .await
    }
}
