use std::sync::Arc;

use crate::modules::audit::core::audit_record::NewAuditRecord;
use crate::modules::audit::core::ports::{AuditTrail, record_best_effort};
use crate::modules::timesheets::core::decide::decide_review;
use crate::modules::timesheets::core::ports::TimesheetRepository;
use crate::modules::timesheets::core::timesheet::{ReviewDecision, Timesheet};
use crate::shared::auth::identity::Identity;
use crate::shared::core::clock::Clock;
use crate::shared::core::errors::{ApplicationError, ApplicationResult};

pub struct DecideTimesheetHandler {
    timesheets: Arc<dyn TimesheetRepository>,
    audit: Arc<dyn AuditTrail>,
    clock: Arc<dyn Clock>,
}

impl DecideTimesheetHandler {
    pub fn new(
        timesheets: Arc<dyn TimesheetRepository>,
        audit: Arc<dyn AuditTrail>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            timesheets,
            audit,
            clock,
        }
    }

    pub async fn handle(
        &self,
        actor: &Identity,
        timesheet_id: i64,
        decision: ReviewDecision,
        hr_note: Option<String>,
    ) -> ApplicationResult<Timesheet> {
        actor.ensure_hr()?;

        let now = self.clock.now();
        let review = decide_review(decision, hr_note, now);
        let timesheet = self
            .timesheets
            .save_review(timesheet_id, review.status, review.hr_note, review.decided_at)
            .await?
            .ok_or(ApplicationError::NotFound("timesheet"))?;

        tracing::info!(
            timesheet_id,
            employee_id = timesheet.employee_id,
            status = %timesheet.status,
            "timesheet decided"
        );
        let action = format!("timesheet.{}", decision.as_str());
        record_best_effort(
            &*self.audit,
            NewAuditRecord::by(actor, &action, "timesheet", Some(timesheet_id), now),
        )
        .await;

        Ok(timesheet)
    }
}

/// Parses the wire form of a decision into a validation error on failure.
pub fn parse_decision(value: &str) -> ApplicationResult<ReviewDecision> {
    value.parse().map_err(ApplicationError::Validation)
}
