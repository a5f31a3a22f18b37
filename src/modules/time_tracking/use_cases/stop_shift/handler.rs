use serde::Serialize;
use std::sync::Arc;

use crate::modules::audit::core::audit_record::NewAuditRecord;
use crate::modules::audit::core::ports::{AuditTrail, record_best_effort};
use crate::modules::employees::core::access::resolve_employee;
use crate::modules::employees::core::ports::EmployeeDirectory;
use crate::modules::time_tracking::core::ports::TimeEntryRepository;
use crate::shared::auth::identity::Identity;
use crate::shared::core::clock::{Clock, WorkCalendar};
use crate::shared::core::errors::ApplicationResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopShiftOutcome {
    pub stopped: bool,
    pub not_running: bool,
    pub entry_id: Option<i64>,
}

impl StopShiftOutcome {
    fn stopped(entry_id: i64) -> Self {
        Self {
            stopped: true,
            not_running: false,
            entry_id: Some(entry_id),
        }
    }

    fn not_running() -> Self {
        Self {
            stopped: false,
            not_running: true,
            entry_id: None,
        }
    }
}

pub struct StopShiftHandler {
    employees: Arc<dyn EmployeeDirectory>,
    entries: Arc<dyn TimeEntryRepository>,
    audit: Arc<dyn AuditTrail>,
    clock: Arc<dyn Clock>,
    calendar: WorkCalendar,
}

impl StopShiftHandler {
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

    /// Closes the most recent open entry of today, if any.
    pub async fn handle(
        &self,
        actor: &Identity,
        employee_id: i64,
    ) -> ApplicationResult<StopShiftOutcome> {
        resolve_employee(&*self.employees, actor, employee_id).await?;

        let now = self.clock.now();
        let today = self.calendar.local_date(now);

        let Some(open) = self.entries.find_open_entry(employee_id, today).await? else {
            return Ok(StopShiftOutcome::not_running());
        };

        if !self
            .entries
            .close_entry(open.id, now.timestamp_millis())
            .await?
        {
            return Ok(StopShiftOutcome::not_running());
        }

        tracing::info!(employee_id, entry_id = open.id, work_date = %today, "shift stopped");
        record_best_effort(
            &*self.audit,
            NewAuditRecord::by(actor, "time.stop", "time_entry", Some(open.id), now),
        )
        .await;

        Ok(StopShiftOutcome::stopped(open.id))
    }
}
