//! SQLite database backing every port in production.
//!
//! One connection guarded by an async mutex. Statements are short, so they run
//! inline on the runtime thread that holds the lock.

use chrono::{DateTime, TimeZone, Utc};
use rusqlite::Connection;
use std::path::Path;
use tokio::sync::Mutex;

use crate::shared::core::errors::RepositoryError;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS employees (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    name           TEXT NOT NULL,
    department     TEXT,
    pin_hash       TEXT NOT NULL,
    created_at_ms  INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS hr_users (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    name      TEXT NOT NULL UNIQUE,
    pin_hash  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS time_entries (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    employee_id  INTEGER NOT NULL REFERENCES employees(id) ON DELETE CASCADE,
    start_ms     INTEGER NOT NULL,
    end_ms       INTEGER,
    work_date    TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_time_entries_employee_date
    ON time_entries(employee_id, work_date);

CREATE UNIQUE INDEX IF NOT EXISTS idx_time_entries_single_open
    ON time_entries(employee_id, work_date) WHERE end_ms IS NULL;

CREATE TABLE IF NOT EXISTS timesheets (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    employee_id      INTEGER NOT NULL REFERENCES employees(id) ON DELETE CASCADE,
    week_start       TEXT NOT NULL,
    status           TEXT NOT NULL CHECK(status IN ('draft','submitted','approved','rejected')),
    hr_note          TEXT,
    submitted_at_ms  INTEGER,
    decided_at_ms    INTEGER,
    UNIQUE(employee_id, week_start)
);

CREATE TABLE IF NOT EXISTS timesheet_notes (
    employee_id    INTEGER NOT NULL REFERENCES employees(id) ON DELETE CASCADE,
    work_date      TEXT NOT NULL,
    note           TEXT NOT NULL,
    updated_at_ms  INTEGER NOT NULL,
    PRIMARY KEY (employee_id, work_date)
);

CREATE TABLE IF NOT EXISTS audit_log (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    actor_role   TEXT NOT NULL,
    actor_name   TEXT NOT NULL,
    action       TEXT NOT NULL,
    entity_type  TEXT NOT NULL,
    entity_id    INTEGER,
    at_ms        INTEGER NOT NULL
);
"#;

pub struct SqliteDatabase {
    conn: Mutex<Connection>,
}

impl SqliteDatabase {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        Self::initialize(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, RepositoryError> {
        Self::initialize(Connection::open_in_memory()?)
    }

    fn initialize(conn: Connection) -> Result<Self, RepositoryError> {
        run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run a closure against the connection while holding the lock.
    pub async fn with_conn<F, T>(&self, func: F) -> Result<T, RepositoryError>
    where
        F: FnOnce(&mut Connection) -> rusqlite::Result<T>,
    {
        let mut conn = self.conn.lock().await;
        func(&mut *conn).map_err(RepositoryError::from)
    }
}

/// Idempotent: safe to run on every start.
pub fn run_migrations(conn: &Connection) -> rusqlite::Result<()> {
    conn.pragma_update(None, "foreign_keys", "ON")?;
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

pub fn instant_from_millis(millis: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(millis).single().unwrap_or_default()
}
