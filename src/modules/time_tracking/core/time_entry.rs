// A single work interval for one employee on one calendar day.
//
// Notes
// - Instants are epoch milliseconds, like every other i64 time value here.
// - work_date is fixed when the entry is opened and never recomputed.
// - end_ms is None while the shift is still running.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: i64,
    pub employee_id: i64,
    pub start_ms: i64,
    pub end_ms: Option<i64>,
    pub work_date: NaiveDate,
}

impl TimeEntry {
    pub fn is_open(&self) -> bool {
        self.end_ms.is_none()
    }

    /// Worked time, counting an open entry as running until `now_ms`.
    /// Never negative, even if the clock went backwards.
    pub fn worked_millis(&self, now_ms: i64) -> i64 {
        let end = self.end_ms.unwrap_or(now_ms);
        (end - self.start_ms).max(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTimeEntry {
    pub employee_id: i64,
    pub start_ms: i64,
    pub work_date: NaiveDate,
}
