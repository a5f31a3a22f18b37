// Pure decisions for the timesheet lifecycle.
//
// States: draft (implicit), submitted, approved, rejected.
// - submit: draft | submitted | rejected -> submitted, refreshing submitted_at.
//   An approved week is closed to resubmission.
// - review: any stored timesheet -> approved | rejected, stamping decided_at.
//   Re-deciding an already decided timesheet is accepted.
// - Resubmission keeps the previous hr_note and decided_at until the next decision.
//
// Boundaries
// - No input or output. Callers persist the resulting Submission or Review.

use chrono::{DateTime, Utc};

use crate::modules::timesheets::core::timesheet::{ReviewDecision, Timesheet, TimesheetStatus};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("timesheet already approved")]
    AlreadyApproved,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub status: TimesheetStatus,
    pub hr_note: Option<String>,
    pub decided_at: DateTime<Utc>,
}

pub fn decide_submit(
    current: Option<&Timesheet>,
    now: DateTime<Utc>,
) -> Result<Submission, DecideError> {
    match TimesheetStatus::of(current) {
        TimesheetStatus::Approved => Err(DecideError::AlreadyApproved),
        TimesheetStatus::Draft | TimesheetStatus::Submitted | TimesheetStatus::Rejected => {
            Ok(Submission { submitted_at: now })
        }
    }
}

/// Blank notes are stored as no note.
pub fn decide_review(
    decision: ReviewDecision,
    hr_note: Option<String>,
    now: DateTime<Utc>,
) -> Review {
    let hr_note = hr_note
        .map(|note| note.trim().to_string())
        .filter(|note| !note.is_empty());
    Review {
        status: decision.resulting_status(),
        hr_note,
        decided_at: now,
    }
}
