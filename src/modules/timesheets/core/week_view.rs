// Read model for one employee's week.
//
// Responsibilities
// - Bucket entries into the seven days starting at the week anchor.
// - Flag days that still have a running entry; totals may be incomplete then.
// - Attach the daily note, if any.
// - total_hours is the sum of the rounded day hours, so it always equals the
//   sum shown per day. total_seconds is exact.

use chrono::NaiveDate;
use serde::Serialize;

use crate::modules::time_tracking::core::aggregation::{
    count_open, round2, round_hours, sum_millis, whole_seconds,
};
use crate::modules::time_tracking::core::time_entry::TimeEntry;
use crate::modules::timesheets::core::timesheet::{Timesheet, TimesheetNote, TimesheetStatus};
use crate::shared::core::dates::{DateRange, week_days};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayView {
    pub date: NaiveDate,
    pub hours: f64,
    pub worked_seconds: i64,
    pub open: bool,
    pub open_entries: usize,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekView {
    pub week_start: NaiveDate,
    pub timesheet_id: Option<i64>,
    pub status: TimesheetStatus,
    pub hr_note: Option<String>,
    pub total_hours: f64,
    pub total_seconds: i64,
    pub open_entry_count: usize,
    pub days: Vec<DayView>,
}

pub fn build_week_view(
    week_start: NaiveDate,
    timesheet: Option<&Timesheet>,
    entries: &[TimeEntry],
    notes: &[TimesheetNote],
    now_ms: i64,
) -> WeekView {
    let days: Vec<DayView> = week_days(week_start)
        .into_iter()
        .map(|date| {
            let millis = sum_millis(entries, &DateRange::day(date), now_ms);
            let open_entries = count_open(entries, date);
            DayView {
                date,
                hours: round_hours(millis),
                worked_seconds: whole_seconds(millis),
                open: open_entries > 0,
                open_entries,
                note: notes
                    .iter()
                    .find(|note| note.work_date == date)
                    .map(|note| note.note.clone()),
            }
        })
        .collect();

    let total_millis = sum_millis(entries, &DateRange::week(week_start), now_ms);

    WeekView {
        week_start,
        timesheet_id: timesheet.map(|t| t.id),
        status: TimesheetStatus::of(timesheet),
        hr_note: timesheet.and_then(|t| t.hr_note.clone()),
        total_hours: round2(days.iter().map(|day| day.hours).sum()),
        total_seconds: whole_seconds(total_millis),
        open_entry_count: days.iter().map(|day| day.open_entries).sum(),
        days,
    }
}
