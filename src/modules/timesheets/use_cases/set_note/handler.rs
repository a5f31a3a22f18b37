use chrono::NaiveDate;
use std::sync::Arc;

use crate::modules::audit::core::audit_record::NewAuditRecord;
use crate::modules::audit::core::ports::{AuditTrail, record_best_effort};
use crate::modules::employees::core::access::resolve_employee;
use crate::modules::employees::core::ports::EmployeeDirectory;
use crate::modules::timesheets::core::ports::TimesheetNoteRepository;
use crate::modules::timesheets::core::timesheet::TimesheetNote;
use crate::shared::auth::identity::Identity;
use crate::shared::core::clock::Clock;
use crate::shared::core::errors::ApplicationResult;

pub struct SetNoteHandler {
    employees: Arc<dyn EmployeeDirectory>,
    notes: Arc<dyn TimesheetNoteRepository>,
    audit: Arc<dyn AuditTrail>,
    clock: Arc<dyn Clock>,
}

impl SetNoteHandler {
    pub fn new(
        employees: Arc<dyn EmployeeDirectory>,
        notes: Arc<dyn TimesheetNoteRepository>,
        audit: Arc<dyn AuditTrail>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            employees,
            notes,
            audit,
            clock,
        }
    }

    pub async fn handle(
        &self,
        actor: &Identity,
        employee_id: i64,
        work_date: NaiveDate,
        note: String,
    ) -> ApplicationResult<TimesheetNote> {
        resolve_employee(&*self.employees, actor, employee_id).await?;

        let now = self.clock.now();
        let note = TimesheetNote {
            employee_id,
            work_date,
            note,
            updated_at: now,
        };
        self.notes.upsert_note(note.clone()).await?;

        tracing::info!(employee_id, work_date = %work_date, "timesheet note saved");
        record_best_effort(
            &*self.audit,
            NewAuditRecord::by(actor, "timesheet.note", "timesheet_note", Some(employee_id), now),
        )
        .await;

        Ok(note)
    }
}
