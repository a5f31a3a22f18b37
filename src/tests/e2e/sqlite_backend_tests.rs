// The same flows against SQLite, to keep both backends in step.

use axum::http::StatusCode;
use chrono::{TimeZone, Utc};
use rstest::{fixture, rstest};
use std::sync::Arc;

use crate::shared::auth::identity::Identity;
use crate::shared::infrastructure::sqlite::SqliteDatabase;
use crate::shell::state::Ports;
use crate::tests::fixtures::context::{TestContext, before_each};
use crate::tests::fixtures::http::send;

#[fixture]
fn over_sqlite(before_each: TestContext) -> TestContext {
    let database = SqliteDatabase::open_in_memory().unwrap();
    before_each.with_ports(Ports::backed_by(Arc::new(database)))
}

async fn hire(context: &TestContext, hr: &str, name: &str) -> i64 {
    let payload = format!(r#"{{"name":"{name}","department":"Operations","pin":"1234"}}"#);
    let (status, body) = send(context, "POST", "/employees", Some(hr), Some(&payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

#[rstest]
#[tokio::test]
async fn an_eight_hour_day_is_reported_from_sqlite(over_sqlite: TestContext) {
    let context = over_sqlite;
    let hr = context.bearer(&Identity::hr("Hana"));
    let ada = hire(&context, &hr, "Ada").await;

    context.clock.set(Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap());
    send(&context, "POST", &format!("/employees/{ada}/time/start"), Some(&hr), None).await;
    let (_, again) =
        send(&context, "POST", &format!("/employees/{ada}/time/start"), Some(&hr), None).await;
    context.clock.set(Utc.with_ymd_and_hms(2024, 1, 2, 17, 0, 0).unwrap());
    send(&context, "POST", &format!("/employees/{ada}/time/stop"), Some(&hr), None).await;

    let (_, summary) = send(
        &context,
        "GET",
        &format!("/employees/{ada}/time/summary"),
        Some(&hr),
        None,
    )
    .await;
    let (_, week) = send(
        &context,
        "GET",
        &format!("/employees/{ada}/timesheet/week?week_start=2024-01-01"),
        Some(&hr),
        None,
    )
    .await;

    assert_eq!(again["already_running"], true);
    assert_eq!(summary["today_hours"], 8.0);
    assert_eq!(week["days"][1]["hours"], 8.0);
    assert_eq!(week["days"][1]["open"], false);
}

#[rstest]
#[tokio::test]
async fn review_and_cascade_work_against_sqlite(over_sqlite: TestContext) {
    let context = over_sqlite;
    let hr = context.bearer(&Identity::hr("Hana"));
    let ada = hire(&context, &hr, "Ada").await;
    let grace = hire(&context, &hr, "Grace").await;

    for id in [ada, grace] {
        send(
            &context,
            "POST",
            &format!("/employees/{id}/timesheet/submit"),
            Some(&hr),
            Some(r#"{"week_start":"2024-01-01"}"#),
        )
        .await;
    }
    let (_, queue) = send(&context, "GET", "/timesheets", Some(&hr), None).await;
    assert_eq!(queue.as_array().unwrap().len(), 2);

    let ada_sheet = queue
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["employee_id"] == ada)
        .unwrap()["id"]
        .clone();
    let (status, decided) = send(
        &context,
        "POST",
        &format!("/timesheets/{ada_sheet}/decision"),
        Some(&hr),
        Some(r#"{"decision":"approve","hr_note":"ok"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decided["status"], "approved");

    let (_, approved) =
        send(&context, "GET", "/timesheets?status=approved", Some(&hr), None).await;
    assert_eq!(approved[0]["employee_name"], "Ada");

    send(&context, "DELETE", &format!("/employees/{ada}"), Some(&hr), None).await;
    let (_, remaining) = send(&context, "GET", "/timesheets", Some(&hr), None).await;
    let remaining = remaining.as_array().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["employee_id"], grace);
}
