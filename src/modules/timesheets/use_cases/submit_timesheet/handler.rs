use chrono::NaiveDate;
use std::sync::Arc;

use crate::modules::audit::core::audit_record::NewAuditRecord;
use crate::modules::audit::core::ports::{AuditTrail, record_best_effort};
use crate::modules::employees::core::access::resolve_employee;
use crate::modules::employees::core::ports::EmployeeDirectory;
use crate::modules::timesheets::core::decide::{DecideError, decide_submit};
use crate::modules::timesheets::core::ports::TimesheetRepository;
use crate::modules::timesheets::core::timesheet::Timesheet;
use crate::shared::auth::identity::Identity;
use crate::shared::core::clock::Clock;
use crate::shared::core::dates::week_start;
use crate::shared::core::errors::{ApplicationError, ApplicationResult};

pub struct SubmitTimesheetHandler {
    employees: Arc<dyn EmployeeDirectory>,
    timesheets: Arc<dyn TimesheetRepository>,
    audit: Arc<dyn AuditTrail>,
    clock: Arc<dyn Clock>,
}

impl SubmitTimesheetHandler {
    pub fn new(
        employees: Arc<dyn EmployeeDirectory>,
        timesheets: Arc<dyn TimesheetRepository>,
        audit: Arc<dyn AuditTrail>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            employees,
            timesheets,
            audit,
            clock,
        }
    }

    pub async fn handle(
        &self,
        actor: &Identity,
        employee_id: i64,
        week_of: NaiveDate,
    ) -> ApplicationResult<Timesheet> {
        resolve_employee(&*self.employees, actor, employee_id).await?;

        let monday = week_start(week_of);
        let now = self.clock.now();
        let current = self.timesheets.find_timesheet(employee_id, monday).await?;

        let submission = decide_submit(current.as_ref(), now)
            .map_err(|reason| ApplicationError::Conflict(reason.to_string()))?;

        // An approval may land between the read above and this write.
        let timesheet = self
            .timesheets
            .save_submission(employee_id, monday, submission.submitted_at)
            .await?
            .ok_or_else(|| ApplicationError::Conflict(DecideError::AlreadyApproved.to_string()))?;

        tracing::info!(
            employee_id,
            timesheet_id = timesheet.id,
            week_start = %monday,
            "timesheet submitted"
        );
        record_best_effort(
            &*self.audit,
            NewAuditRecord::by(actor, "timesheet.submit", "timesheet", Some(timesheet.id), now),
        )
        .await;

        Ok(timesheet)
    }
}
