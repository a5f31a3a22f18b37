// Submit, review, resubmit and export one week, over HTTP.

use axum::http::StatusCode;
use chrono::Duration;
use http_body_util::BodyExt;
use rstest::rstest;

use crate::shared::auth::identity::Identity;
use crate::tests::fixtures::context::{TestContext, before_each};
use crate::tests::fixtures::http::{raw, send};

const WEEK: &str = r#"{"week_start":"2024-01-01"}"#;

#[rstest]
#[tokio::test]
async fn a_rejected_week_is_resubmitted_and_approved(before_each: TestContext) {
    let context = before_each;
    let ada = context.employee("Ada").await;
    let employee = context.bearer(&Identity::employee(ada, "Ada"));
    let hr = context.bearer(&Identity::hr("Hana"));
    let submit = format!("/employees/{ada}/timesheet/submit");
    let week = format!("/employees/{ada}/timesheet/week?week_start=2024-01-01");

    let (_, first) = send(&context, "POST", &submit, Some(&employee), Some(WEEK)).await;
    let decision = format!("/timesheets/{}/decision", first["id"]);

    let (_, queue) = send(&context, "GET", "/timesheets?status=submitted", Some(&hr), None).await;
    assert_eq!(queue[0]["id"], first["id"]);

    context.clock.advance(Duration::hours(1));
    let (status, rejected) = send(
        &context,
        "POST",
        &decision,
        Some(&hr),
        Some(r#"{"decision":"reject","hr_note":"add Friday"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rejected["status"], "rejected");

    let (_, view) = send(&context, "GET", &week, Some(&employee), None).await;
    assert_eq!(view["status"], "rejected");
    assert_eq!(view["hr_note"], "add Friday");

    context.clock.advance(Duration::hours(1));
    let (_, resubmitted) = send(&context, "POST", &submit, Some(&employee), Some(WEEK)).await;
    assert_eq!(resubmitted["id"], first["id"]);
    assert_eq!(resubmitted["status"], "submitted");
    assert_eq!(resubmitted["submitted_at"], "2024-01-02T11:00:00Z");
    assert_eq!(resubmitted["hr_note"], "add Friday");
    assert_eq!(resubmitted["decided_at"], "2024-01-02T10:00:00Z");

    let (_, approved) = send(
        &context,
        "POST",
        &decision,
        Some(&hr),
        Some(r#"{"decision":"approve"}"#),
    )
    .await;
    assert_eq!(approved["status"], "approved");
    assert!(approved["hr_note"].is_null());

    let (status, _) = send(&context, "POST", &submit, Some(&employee), Some(WEEK)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, redecided) = send(
        &context,
        "POST",
        &decision,
        Some(&hr),
        Some(r#"{"decision":"reject"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(redecided["status"], "rejected");

    let (_, all) = send(&context, "GET", "/timesheets", Some(&hr), None).await;
    assert_eq!(all.as_array().unwrap().len(), 1);

    let (_, audit) = send(&context, "GET", "/audit", Some(&hr), None).await;
    let actions: Vec<&str> = audit
        .as_array()
        .unwrap()
        .iter()
        .map(|record| record["action"].as_str().unwrap())
        .collect();
    assert_eq!(
        actions,
        vec![
            "timesheet.reject",
            "timesheet.approve",
            "timesheet.submit",
            "timesheet.reject",
            "timesheet.submit",
        ]
    );
}

#[rstest]
#[tokio::test]
async fn exported_notes_are_quoted(before_each: TestContext) {
    let context = before_each;
    let ada = context.employee("Ada").await;
    let employee = context.bearer(&Identity::employee(ada, "Ada"));
    let hr = context.bearer(&Identity::hr("Hana"));

    let (_, submitted) = send(
        &context,
        "POST",
        &format!("/employees/{ada}/timesheet/submit"),
        Some(&employee),
        Some(WEEK),
    )
    .await;
    send(
        &context,
        "POST",
        &format!("/timesheets/{}/decision", submitted["id"]),
        Some(&hr),
        Some(r#"{"decision":"reject","hr_note":"say \"hi\", then fix"}"#),
    )
    .await;

    let response = raw(
        &context,
        "GET",
        "/timesheets/export.csv?status=rejected",
        Some(&hr),
        None,
    )
    .await;
    assert_eq!(
        response.headers()["content-disposition"],
        "attachment; filename=\"timesheets_all_rejected.csv\""
    );
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8(bytes.to_vec()).unwrap();

    assert!(body.contains(r#","say ""hi"", then fix","#));
}

#[rstest]
#[tokio::test]
async fn notes_survive_submission_and_show_in_the_week(before_each: TestContext) {
    let context = before_each;
    let ada = context.employee("Ada").await;
    let employee = context.bearer(&Identity::employee(ada, "Ada"));
    let note = format!("/employees/{ada}/timesheet/note");

    send(
        &context,
        "PUT",
        &note,
        Some(&employee),
        Some(r#"{"work_date":"2024-01-05","note":"first"}"#),
    )
    .await;
    send(
        &context,
        "PUT",
        &note,
        Some(&employee),
        Some(r#"{"work_date":"2024-01-05","note":"doctor, left at 14:00"}"#),
    )
    .await;
    send(
        &context,
        "POST",
        &format!("/employees/{ada}/timesheet/submit"),
        Some(&employee),
        Some(WEEK),
    )
    .await;

    let (_, week) = send(
        &context,
        "GET",
        &format!("/employees/{ada}/timesheet/week?week_start=2024-01-01"),
        Some(&employee),
        None,
    )
    .await;
    assert_eq!(week["status"], "submitted");
    assert_eq!(week["days"][4]["note"], "doctor, left at 14:00");
    assert!(week["days"][3]["note"].is_null());
}
