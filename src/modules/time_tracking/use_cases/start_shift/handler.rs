use serde::Serialize;
use std::sync::Arc;

use crate::modules::audit::core::audit_record::NewAuditRecord;
use crate::modules::audit::core::ports::{AuditTrail, record_best_effort};
use crate::modules::employees::core::access::resolve_employee;
use crate::modules::employees::core::ports::EmployeeDirectory;
use crate::modules::time_tracking::core::ports::TimeEntryRepository;
use crate::modules::time_tracking::core::time_entry::NewTimeEntry;
use crate::shared::auth::identity::Identity;
use crate::shared::core::clock::{Clock, WorkCalendar};
use crate::shared::core::errors::{ApplicationError, ApplicationResult, RepositoryError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartShiftOutcome {
    pub started: bool,
    pub already_running: bool,
    pub entry_id: Option<i64>,
}

impl StartShiftOutcome {
    fn started(entry_id: i64) -> Self {
        Self {
            started: true,
            already_running: false,
            entry_id: Some(entry_id),
        }
    }

    fn already_running(entry_id: i64) -> Self {
        Self {
            started: false,
            already_running: true,
            entry_id: Some(entry_id),
        }
    }
}

pub struct StartShiftHandler {
    employees: Arc<dyn EmployeeDirectory>,
    entries: Arc<dyn TimeEntryRepository>,
    audit: Arc<dyn AuditTrail>,
    clock: Arc<dyn Clock>,
    calendar: WorkCalendar,
}

impl StartShiftHandler {
    pub fn new(
        employees: Arc<dyn EmployeeDirectory>,
        entries: Arc<dyn TimeEntryRepository>,
        audit: Arc<dyn AuditTrail>,
        clock: Arc<dyn Clock>,
        calendar: WorkCalendar,
    ) -> Self {
        Self {
            employees,
            entries,
            audit,
            clock,
            calendar,
        }
    }

    pub async fn handle(
        &self,
        actor: &Identity,
        employee_id: i64,
    ) -> ApplicationResult<StartShiftOutcome> {
        resolve_employee(&*self.employees, actor, employee_id).await?;

        let now = self.clock.now();
        let today = self.calendar.local_date(now);

        if let Some(open) = self.entries.find_open_entry(employee_id, today).await? {
            return Ok(StartShiftOutcome::already_running(open.id));
        }

        let inserted = self
            .entries
            .insert_open_entry(NewTimeEntry {
                employee_id,
                start_ms: now.timestamp_millis(),
                work_date: today,
            })
            .await;

        let entry = match inserted {
            Ok(entry) => entry,
            // Either a concurrent start won, or the employee was deleted meanwhile.
            Err(RepositoryError::Conflict(_)) => {
                return match self.entries.find_open_entry(employee_id, today).await? {
                    Some(open) => Ok(StartShiftOutcome::already_running(open.id)),
                    None => Err(ApplicationError::NotFound("employee")),
                };
            }
            Err(error) => return Err(error.into()),
        };

        tracing::info!(employee_id, entry_id = entry.id, work_date = %today, "shift started");
        record_best_effort(
            &*self.audit,
            NewAuditRecord::by(actor, "time.start", "time_entry", Some(entry.id), now),
        )
        .await;

        Ok(StartShiftOutcome::started(entry.id))
    }
}
