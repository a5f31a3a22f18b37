// Sums time entries into worked time.
//
// Purpose
// - Turn a set of entries into a duration for a day, a week, or all time.
// - Nothing is cached: every figure is recomputed from entries at read time.
//
// Boundaries
// - Pure functions. Callers load entries for a DateRange and pass "now".

use chrono::NaiveDate;
use serde::Serialize;

use crate::modules::time_tracking::core::time_entry::TimeEntry;
use crate::shared::core::dates::DateRange;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Total worked milliseconds of the entries whose work date falls in `range`.
pub fn sum_millis<'a>(
    entries: impl IntoIterator<Item = &'a TimeEntry>,
    range: &DateRange,
    now_ms: i64,
) -> i64 {
    entries
        .into_iter()
        .filter(|entry| range.contains(entry.work_date))
        .map(|entry| entry.worked_millis(now_ms))
        .sum()
}

pub fn count_open<'a>(entries: impl IntoIterator<Item = &'a TimeEntry>, date: NaiveDate) -> usize {
    entries
        .into_iter()
        .filter(|entry| entry.work_date == date && entry.is_open())
        .count()
}

/// Hours rounded to two decimals for display.
pub fn round_hours(millis: i64) -> f64 {
    round2(millis as f64 / MILLIS_PER_HOUR)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn whole_seconds(millis: i64) -> i64 {
    millis / 1000
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSummary {
    pub running: bool,
    pub today_hours: f64,
    pub week_hours: f64,
    pub total_hours: f64,
    pub today_seconds: i64,
    pub week_seconds: i64,
    pub total_seconds: i64,
}

impl TimeSummary {
    pub fn from_millis(running: bool, today: i64, week: i64, total: i64) -> Self {
        Self {
            running,
            today_hours: round_hours(today),
            week_hours: round_hours(week),
            total_hours: round_hours(total),
            today_seconds: whole_seconds(today),
            week_seconds: whole_seconds(week),
            total_seconds: whole_seconds(total),
        }
    }
}

#[cfg(test)]
mod aggregation_tests {
    use super::*;
    use crate::shared::core::dates::parse_date;
    use rstest::{fixture, rstest};

    const HOUR: i64 = 3_600_000;

    fn entry(id: i64, date: &str, start_h: i64, end_h: Option<i64>) -> TimeEntry {
        TimeEntry {
            id,
            employee_id: 1,
            start_ms: start_h * HOUR,
            end_ms: end_h.map(|h| h * HOUR),
            work_date: parse_date(date).unwrap(),
        }
    }

    #[fixture]
    fn entries() -> Vec<TimeEntry> {
        vec![
            entry(1, "2024-01-01", 9, Some(12)),
            entry(2, "2024-01-02", 9, Some(17)),
            entry(3, "2024-01-07", 10, Some(11)),
            entry(4, "2024-01-08", 9, Some(10)),
        ]
    }

    #[rstest]
    fn it_should_sum_a_single_day(entries: Vec<TimeEntry>) {
        let range = DateRange::day(parse_date("2024-01-02").unwrap());
        assert_eq!(sum_millis(&entries, &range, 0), 8 * HOUR);
        assert_eq!(round_hours(sum_millis(&entries, &range, 0)), 8.0);
    }

    #[rstest]
    fn it_should_sum_a_monday_anchored_week_without_the_next_monday(entries: Vec<TimeEntry>) {
        let range = DateRange::week(parse_date("2024-01-01").unwrap());
        assert_eq!(sum_millis(&entries, &range, 0), 12 * HOUR);
    }

    #[rstest]
    fn it_should_sum_all_time(entries: Vec<TimeEntry>) {
        assert_eq!(sum_millis(&entries, &DateRange::all_time(), 0), 13 * HOUR);
    }

    #[rstest]
    fn it_should_return_zero_without_entries() {
        assert_eq!(sum_millis(&Vec::<TimeEntry>::new(), &DateRange::all_time(), 0), 0);
    }

    #[rstest]
    fn it_should_count_an_open_entry_as_ongoing_and_grow_monotonically() {
        let entries = vec![entry(1, "2024-01-02", 9, None)];
        let range = DateRange::day(parse_date("2024-01-02").unwrap());
        let first = sum_millis(&entries, &range, 11 * HOUR);
        let later = sum_millis(&entries, &range, 11 * HOUR + 60_000);
        assert!(round_hours(first) >= 2.0);
        assert!(later > first);
        assert_eq!(count_open(&entries, parse_date("2024-01-02").unwrap()), 1);
        assert_eq!(count_open(&entries, parse_date("2024-01-03").unwrap()), 0);
    }

    #[rstest]
    #[case(0, 0.0)]
    #[case(HOUR / 4, 0.25)]
    #[case(HOUR / 3, 0.33)]
    #[case(8 * HOUR, 8.0)]
    fn it_should_round_hours_to_two_decimals(#[case] millis: i64, #[case] hours: f64) {
        assert_eq!(round_hours(millis), hours);
    }

    #[rstest]
    fn it_should_build_a_summary_in_hours_and_seconds() {
        let summary = TimeSummary::from_millis(true, 8 * HOUR, 12 * HOUR, 13 * HOUR);
        assert!(summary.running);
        assert_eq!(summary.today_hours, 8.0);
        assert_eq!(summary.today_seconds, 8 * 3600);
        assert_eq!(summary.week_seconds, 12 * 3600);
        assert_eq!(summary.total_hours, 13.0);
    }
}
