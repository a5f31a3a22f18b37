use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use serde::Deserialize;

use crate::modules::timesheets::core::timesheet::Timesheet;
use crate::shared::auth::identity::Identity;
use crate::shared::core::dates::require_date;
use crate::shared::core::errors::ApplicationError;
use crate::shell::errors::{invalid_body, invalid_path};
use crate::shell::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SubmitBody {
    pub week_start: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    identity: Identity,
    employee_id: Result<Path<i64>, PathRejection>,
    body: Result<Json<SubmitBody>, JsonRejection>,
) -> Result<Json<Timesheet>, ApplicationError> {
    let Path(employee_id) = employee_id.map_err(invalid_path)?;
    let Json(body) = body.map_err(invalid_body)?;
    let week_of = match body.week_start.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => require_date("week_start", value)?,
        _ => return Err(ApplicationError::validation("week_start is required")),
    };

    let timesheet = state
        .submit_timesheet
        .handle(&identity, employee_id, week_of)
        .await?;
    Ok(Json(timesheet))
}

#[cfg(test)]
mod submit_timesheet_http_inbound_tests {
    use axum::http::StatusCode;
    use rstest::rstest;

    use crate::shared::auth::identity::Identity;
    use crate::tests::fixtures::context::{TestContext, before_each};
    use crate::tests::fixtures::http::send;

    #[rstest]
    #[tokio::test]
    async fn it_should_submit_the_week_of_any_date(before_each: TestContext) {
        let context = before_each;
        let ada = context.employee("Ada").await;
        let bearer = context.bearer(&Identity::employee(ada, "Ada"));

        let (status, body) = send(
            &context,
            "POST",
            &format!("/employees/{ada}/timesheet/submit"),
            Some(&bearer),
            Some(r#"{"week_start":"2024-01-04"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["week_start"], "2024-01-01");
        assert_eq!(body["status"], "submitted");
        assert_eq!(body["employee_id"], ada);
    }

    #[rstest]
    #[case(r#"{}"#)]
    #[case(r#"{"week_start":""}"#)]
    #[tokio::test]
    async fn it_should_require_a_week(before_each: TestContext, #[case] payload: &str) {
        let context = before_each;
        let ada = context.employee("Ada").await;
        let bearer = context.bearer(&Identity::employee(ada, "Ada"));

        let (status, body) = send(
            &context,
            "POST",
            &format!("/employees/{ada}/timesheet/submit"),
            Some(&bearer),
            Some(payload),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "week_start is required");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_to_resubmit_an_approved_week(before_each: TestContext) {
        let context = before_each;
        let ada = context.employee("Ada").await;
        let employee = context.bearer(&Identity::employee(ada, "Ada"));
        let hr = context.bearer(&Identity::hr("Hana"));
        let path = format!("/employees/{ada}/timesheet/submit");
        let payload = r#"{"week_start":"2024-01-01"}"#;

        let (_, submitted) = send(&context, "POST", &path, Some(&employee), Some(payload)).await;
        let decision = format!("/timesheets/{}/decision", submitted["id"]);
        send(&context, "POST", &decision, Some(&hr), Some(r#"{"decision":"approve"}"#)).await;

        let (status, body) = send(&context, "POST", &path, Some(&employee), Some(payload)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "timesheet already approved");
    }
}
