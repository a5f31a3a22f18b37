// In memory database backing every port.
//
// Purpose
// - Exercise use cases and HTTP handlers without SQLite.
//
// Responsibilities
// - Hold all tables behind one lock so multi-table writes (cascading deletes,
//   check-then-insert for open entries) happen atomically.
// - Simulate an unavailable backend with toggle_offline().
//
// Each module implements its ports for this type in adapters/outbound/in_memory.rs.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::modules::audit::core::audit_record::AuditRecord;
use crate::modules::employees::core::employee::{Employee, HrAccount};
use crate::modules::time_tracking::core::time_entry::TimeEntry;
use crate::modules::timesheets::core::timesheet::{Timesheet, TimesheetNote};
use crate::shared::core::errors::RepositoryError;

#[derive(Debug, Default)]
pub struct Tables {
    pub employees: BTreeMap<i64, Employee>,
    pub hr_accounts: BTreeMap<i64, HrAccount>,
    pub time_entries: BTreeMap<i64, TimeEntry>,
    pub timesheets: BTreeMap<i64, Timesheet>,
    pub notes: BTreeMap<(i64, NaiveDate), TimesheetNote>,
    pub audit_log: Vec<AuditRecord>,
    last_id: i64,
}

impl Tables {
    /// Ids are unique across tables, which is all callers rely on.
    pub fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

#[derive(Debug, Default)]
pub struct InMemoryDatabase {
    tables: RwLock<Tables>,
    is_offline: bool,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.tables.read().await)
    }

    pub async fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.tables.write().await)
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("In-memory database offline".into()));
        }
        Ok(())
    }
}
