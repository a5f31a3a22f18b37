// A working day driven entirely over HTTP, with the clock moved by hand.

use axum::http::StatusCode;
use chrono::{Duration, TimeZone, Utc};
use rstest::rstest;

use crate::shared::auth::identity::Identity;
use crate::tests::fixtures::context::{TestContext, before_each};
use crate::tests::fixtures::http::send;

struct Workday {
    context: TestContext,
    employee_id: i64,
    identity: Identity,
}

impl Workday {
    async fn begin(context: TestContext) -> Self {
        let employee_id = context.employee("Ada").await;
        Self {
            context,
            employee_id,
            identity: Identity::employee(employee_id, "Ada"),
        }
    }

    /// Issued per request; the clock jumps further than a token lives.
    fn bearer(&self) -> String {
        self.context.bearer(&self.identity)
    }

    async fn post(&self, action: &str) -> serde_json::Value {
        let path = format!("/employees/{}/time/{action}", self.employee_id);
        let (status, body) = send(&self.context, "POST", &path, Some(&self.bearer()), None).await;
        assert_eq!(status, StatusCode::OK);
        body
    }

    async fn get(&self, path: &str) -> serde_json::Value {
        let path = format!("/employees/{}{path}", self.employee_id);
        let (status, body) = send(&self.context, "GET", &path, Some(&self.bearer()), None).await;
        assert_eq!(status, StatusCode::OK);
        body
    }

    fn at(&self, day: u32, hour: u32, minute: u32) {
        self.context
            .clock
            .set(Utc.with_ymd_and_hms(2024, 1, day, hour, minute, 0).unwrap());
    }
}

#[rstest]
#[tokio::test]
async fn an_eight_hour_day_shows_up_in_summary_and_week(before_each: TestContext) {
    let day = Workday::begin(before_each).await;

    day.at(2, 9, 0);
    assert_eq!(day.post("start").await["started"], true);
    day.at(2, 17, 0);
    assert_eq!(day.post("stop").await["stopped"], true);

    let summary = day.get("/time/summary").await;
    assert_eq!(summary["running"], false);
    assert_eq!(summary["today_hours"], 8.0);
    assert_eq!(summary["week_hours"], 8.0);
    assert_eq!(summary["total_seconds"], 8 * 3_600);

    let week = day.get("/timesheet/week?week_start=2024-01-01").await;
    assert_eq!(week["days"][1]["date"], "2024-01-02");
    assert_eq!(week["days"][1]["hours"], 8.0);
    assert_eq!(week["days"][1]["open"], false);
    assert_eq!(week["total_hours"], 8.0);
    assert_eq!(week["open_entry_count"], 0);
}

#[rstest]
#[tokio::test]
async fn a_running_shift_keeps_growing_until_stopped(before_each: TestContext) {
    let day = Workday::begin(before_each).await;
    day.post("start").await;

    day.context.clock.advance(Duration::hours(2));
    let first = day.get("/time/summary").await;
    day.context.clock.advance(Duration::minutes(30));
    let second = day.get("/time/summary").await;

    assert_eq!(first["running"], true);
    assert_eq!(first["today_hours"], 2.0);
    assert_eq!(second["today_hours"], 2.5);
    assert!(second["today_seconds"].as_i64() > first["today_seconds"].as_i64());
}

#[rstest]
#[tokio::test]
async fn repeated_starts_and_stops_are_no_ops(before_each: TestContext) {
    let day = Workday::begin(before_each).await;

    assert_eq!(day.post("stop").await["not_running"], true);
    day.post("start").await;
    assert_eq!(day.post("start").await["already_running"], true);
    day.context.clock.advance(Duration::hours(1));
    day.post("stop").await;
    assert_eq!(day.post("stop").await["not_running"], true);

    let week = day.get("/timesheet/week").await;
    assert_eq!(week["total_seconds"], 3_600);
    assert_eq!(week["open_entry_count"], 0);
}

#[rstest]
#[tokio::test]
async fn a_shift_left_open_past_midnight_stays_on_its_start_day(before_each: TestContext) {
    let day = Workday::begin(before_each).await;

    day.at(2, 23, 0);
    day.post("start").await;
    day.at(3, 1, 0);

    assert_eq!(day.post("stop").await["not_running"], true);
    let summary = day.get("/time/summary").await;
    assert_eq!(summary["running"], false);
    assert_eq!(summary["today_hours"], 0.0);
    assert_eq!(summary["week_hours"], 2.0);

    let week = day.get("/timesheet/week").await;
    assert_eq!(week["days"][1]["open"], true);
    assert_eq!(week["days"][1]["hours"], 2.0);
    assert_eq!(week["open_entry_count"], 1);

    assert_eq!(day.post("start").await["started"], true);
}

#[rstest]
#[tokio::test]
async fn week_totals_match_the_sum_of_rounded_days(before_each: TestContext) {
    let day = Workday::begin(before_each).await;

    for date in [1, 2, 3] {
        day.at(date, 8, 0);
        day.post("start").await;
        day.at(date, 8, 20);
        day.post("stop").await;
    }

    let week = day.get("/timesheet/week?week_start=2024-01-07").await;
    let days: f64 = week["days"]
        .as_array()
        .unwrap()
        .iter()
        .map(|day| day["hours"].as_f64().unwrap())
        .sum();

    assert_eq!(week["week_start"], "2024-01-01");
    assert_eq!(week["days"][0]["hours"], 0.33);
    assert_eq!(week["total_hours"], 0.99);
    assert!((week["total_hours"].as_f64().unwrap() - days).abs() < 1e-9);
    assert_eq!(week["total_seconds"], 3 * 20 * 60);
}
