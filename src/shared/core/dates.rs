// Calendar helpers shared by aggregation and the weekly timesheet.
//
// Week anchor
// - A week starts on Monday. Sunday is the last day of its week, so a Sunday
//   maps six days back rather than one day forward.
//
// Ranges
// - All ranges are half open: [from, until). A missing bound is unbounded.

use chrono::{Datelike, Days, NaiveDate};

use crate::shared::core::errors::ApplicationError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DAYS_PER_WEEK: u64 = 7;

pub fn week_start(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_monday());
    date - Days::new(back)
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Parses a caller supplied date, naming the offending field on failure.
pub fn require_date(field: &str, value: &str) -> Result<NaiveDate, ApplicationError> {
    parse_date(value).ok_or_else(|| ApplicationError::validation(format!("{field} must be YYYY-MM-DD")))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// The seven dates of the week that starts at `monday`.
pub fn week_days(monday: NaiveDate) -> Vec<NaiveDate> {
    (0..DAYS_PER_WEEK).map(|i| monday + Days::new(i)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
}

impl DateRange {
    pub fn day(date: NaiveDate) -> Self {
        Self {
            from: Some(date),
            until: Some(date + Days::new(1)),
        }
    }

    pub fn week(monday: NaiveDate) -> Self {
        Self {
            from: Some(monday),
            until: Some(monday + Days::new(DAYS_PER_WEEK)),
        }
    }

    pub fn all_time() -> Self {
        Self {
            from: None,
            until: None,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.until.is_none_or(|until| date < until)
    }
}
