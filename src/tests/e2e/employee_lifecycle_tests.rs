// Accounts from creation to deletion: login, access rule, cascade, failures.

use axum::http::StatusCode;
use chrono::Duration;
use rstest::rstest;

use crate::modules::employees::use_cases::manage_employees::handler::bootstrap_hr_account;
use crate::shared::auth::identity::Identity;
use crate::shared::infrastructure::in_memory::InMemoryDatabase;
use crate::tests::fixtures::context::{TestContext, before_each};
use crate::tests::fixtures::http::send;

async fn login(context: &TestContext, path: &str, payload: &str) -> (StatusCode, String) {
    let (status, body) = send(context, "POST", path, None, Some(payload)).await;
    let bearer = body["token"]
        .as_str()
        .map(|token| format!("Bearer {token}"))
        .unwrap_or_default();
    (status, bearer)
}

#[rstest]
#[tokio::test]
async fn an_employee_is_created_works_and_is_deleted(before_each: TestContext) {
    let context = before_each;
    bootstrap_hr_account(&*context.database, "Hana", "2468")
        .await
        .unwrap();
    let (status, hr) = login(&context, "/auth/hr/login", r#"{"name":"Hana","pin":"2468"}"#).await;
    assert_eq!(status, StatusCode::OK);

    let (status, created) = send(
        &context,
        "POST",
        "/employees",
        Some(&hr),
        Some(r#"{"name":"Ada","department":"Kitchen","pin":"1357"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let ada = created["id"].as_i64().unwrap();
    let grace = context.employee("Grace").await;

    let credentials = format!(r#"{{"id":{ada},"pin":"1357"}}"#);
    let (_, employee) = login(&context, "/auth/employee/login", &credentials).await;

    let (status, _) = send(
        &context,
        "POST",
        &format!("/employees/{ada}/time/start"),
        Some(&employee),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    send(
        &context,
        "POST",
        &format!("/employees/{ada}/timesheet/submit"),
        Some(&employee),
        Some(r#"{"week_start":"2024-01-01"}"#),
    )
    .await;

    let (status, _) = send(
        &context,
        "GET",
        &format!("/employees/{grace}/time/summary"),
        Some(&employee),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&context, "DELETE", &format!("/employees/{ada}"), Some(&hr), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &context,
        "GET",
        &format!("/employees/{ada}/time/summary"),
        Some(&hr),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = login(&context, "/auth/employee/login", &credentials).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let tables = context.database.read().await.unwrap();
    assert!(tables.time_entries.values().all(|entry| entry.employee_id != ada));
    assert!(tables.timesheets.is_empty());
    assert_eq!(tables.employees.len(), 1);
}

#[rstest]
#[tokio::test]
async fn tokens_stop_working_once_expired(before_each: TestContext) {
    let context = before_each;
    let ada = context.employee("Ada").await;
    let (_, bearer) = login(
        &context,
        "/auth/employee/login",
        &format!(r#"{{"id":{ada},"pin":"1234"}}"#),
    )
    .await;
    let summary = format!("/employees/{ada}/time/summary");

    let (before, _) = send(&context, "GET", &summary, Some(&bearer), None).await;
    context.clock.advance(Duration::hours(12) + Duration::seconds(1));
    let (after, body) = send(&context, "GET", &summary, Some(&bearer), None).await;

    assert_eq!(before, StatusCode::OK);
    assert_eq!(after, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "authentication required");
}

#[rstest]
#[tokio::test]
async fn store_failures_surface_as_a_generic_server_error(before_each: TestContext) {
    let hr = before_each.bearer(&Identity::hr("Hana"));
    let mut database = InMemoryDatabase::new();
    database.toggle_offline();
    let context = TestContext::new(database);

    let (status, body) = send(&context, "GET", "/employees", Some(&hr), None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal server error");
}

#[rstest]
#[tokio::test]
async fn a_broken_audit_trail_does_not_block_work(before_each: TestContext) {
    let context = before_each.with_failing_audit();
    let ada = context.employee("Ada").await;
    let bearer = context.bearer(&Identity::employee(ada, "Ada"));

    let (status, body) = send(
        &context,
        "POST",
        &format!("/employees/{ada}/time/start"),
        Some(&bearer),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["started"], true);
}
