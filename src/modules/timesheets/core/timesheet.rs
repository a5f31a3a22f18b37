// Weekly timesheet record and its vocabulary.
//
// Notes
// - A week has no row until it is first submitted. Until then its status is Draft,
//   computed rather than stored.
// - hr_note and decided_at only carry meaning once a decision has been made.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::core::dates::{self, require_date};
use crate::shared::core::errors::{ApplicationError, ApplicationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimesheetStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
}

impl TimesheetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimesheetStatus::Draft => "draft",
            TimesheetStatus::Submitted => "submitted",
            TimesheetStatus::Approved => "approved",
            TimesheetStatus::Rejected => "rejected",
        }
    }

    /// Status of a week, whether or not a row exists for it.
    pub fn of(timesheet: Option<&Timesheet>) -> Self {
        timesheet.map_or(TimesheetStatus::Draft, |t| t.status)
    }
}

impl fmt::Display for TimesheetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimesheetStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "draft" => Ok(TimesheetStatus::Draft),
            "submitted" => Ok(TimesheetStatus::Submitted),
            "approved" => Ok(TimesheetStatus::Approved),
            "rejected" => Ok(TimesheetStatus::Rejected),
            other => Err(format!("invalid status: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ReviewDecision {
    pub fn resulting_status(&self) -> TimesheetStatus {
        match self {
            ReviewDecision::Approve => TimesheetStatus::Approved,
            ReviewDecision::Reject => TimesheetStatus::Rejected,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewDecision::Approve => "approve",
            ReviewDecision::Reject => "reject",
        }
    }
}

impl FromStr for ReviewDecision {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "approve" => Ok(ReviewDecision::Approve),
            "reject" => Ok(ReviewDecision::Reject),
            _ => Err("decision must be approve or reject".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timesheet {
    pub id: i64,
    pub employee_id: i64,
    pub week_start: NaiveDate,
    pub status: TimesheetStatus,
    pub hr_note: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub decided_at: Option<DateTime<Utc>>,
}

/// A note attached to a calendar day, independent of any timesheet row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetNote {
    pub employee_id: i64,
    pub work_date: NaiveDate,
    pub note: String,
    pub updated_at: DateTime<Utc>,
}

/// A timesheet joined with the identity of its employee, for HR review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimesheetListing {
    pub timesheet: Timesheet,
    pub employee_name: String,
    pub employee_department: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimesheetFilter {
    pub week_start: Option<NaiveDate>,
    pub status: Option<TimesheetStatus>,
}

impl TimesheetFilter {
    /// Builds a filter from raw query values. Blank values mean "no filter".
    pub fn parse(week_start: Option<&str>, status: Option<&str>) -> ApplicationResult<Self> {
        let week_start = present(week_start)
            .map(|value| require_date("week_start", value).map(dates::week_start))
            .transpose()?;
        let status = present(status)
            .map(|value| value.parse::<TimesheetStatus>().map_err(ApplicationError::Validation))
            .transpose()?;
        Ok(Self { week_start, status })
    }

    pub fn matches(&self, timesheet: &Timesheet) -> bool {
        self.week_start.is_none_or(|week| timesheet.week_start == week)
            && self.status.is_none_or(|status| timesheet.status == status)
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
