// HTTP and GraphQL renderings of application errors.
//
// Every failure becomes a short {"error": "..."} body. Repository and internal
// failures are logged here and reach the caller only as "internal server error".

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use async_graphql::ErrorExtensions;
use serde_json::json;

use crate::shared::core::errors::ApplicationError;

pub const INTERNAL_MESSAGE: &str = "internal server error";

impl ApplicationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApplicationError::Validation(_) => StatusCode::BAD_REQUEST,
            ApplicationError::Unauthorized | ApplicationError::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            ApplicationError::Forbidden => StatusCode::FORBIDDEN,
            ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
            ApplicationError::Conflict(_) => StatusCode::CONFLICT,
            ApplicationError::Repository(_) | ApplicationError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Machine readable code carried in GraphQL error extensions.
    pub fn code(&self) -> &'static str {
        match self {
            ApplicationError::Validation(_) => "BAD_REQUEST",
            ApplicationError::Unauthorized | ApplicationError::InvalidCredentials => {
                "UNAUTHORIZED"
            }
            ApplicationError::Forbidden => "FORBIDDEN",
            ApplicationError::NotFound(_) => "NOT_FOUND",
            ApplicationError::Conflict(_) => "CONFLICT",
            ApplicationError::Repository(_) | ApplicationError::Internal(_) => "INTERNAL",
        }
    }

    /// The message shown to callers. Backend failures are logged and replaced.
    pub fn public_message(&self) -> String {
        match self {
            ApplicationError::Repository(_) | ApplicationError::Internal(_) => {
                tracing::error!(error = %self, "request failed");
                INTERNAL_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}

impl ErrorExtensions for ApplicationError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.public_message()).extend_with(|_, extensions| {
            extensions.set("code", code);
        })
    }
}

/// Malformed or mistyped JSON bodies are reported without parser details.
pub fn invalid_body(rejection: JsonRejection) -> ApplicationError {
    tracing::debug!(%rejection, "rejected request body");
    ApplicationError::validation("invalid request body")
}

pub fn invalid_path(rejection: PathRejection) -> ApplicationError {
    tracing::debug!(%rejection, "rejected path parameters");
    ApplicationError::validation("invalid path parameter")
}

pub fn invalid_query(rejection: QueryRejection) -> ApplicationError {
    tracing::debug!(%rejection, "rejected query string");
    ApplicationError::validation("invalid query string")
}

#[cfg(test)]
mod shell_errors_tests {
    use super::*;
    use crate::shared::core::errors::RepositoryError;
    use http_body_util::BodyExt;
    use rstest::rstest;

    async fn body_of(error: ApplicationError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[rstest]
    #[case(ApplicationError::validation("week_start is required"), StatusCode::BAD_REQUEST, "week_start is required")]
    #[case(ApplicationError::Unauthorized, StatusCode::UNAUTHORIZED, "authentication required")]
    #[case(ApplicationError::InvalidCredentials, StatusCode::UNAUTHORIZED, "invalid credentials")]
    #[case(ApplicationError::Forbidden, StatusCode::FORBIDDEN, "forbidden")]
    #[case(ApplicationError::NotFound("timesheet"), StatusCode::NOT_FOUND, "timesheet not found")]
    #[case(ApplicationError::Conflict("timesheet already approved".into()), StatusCode::CONFLICT, "timesheet already approved")]
    #[tokio::test]
    async fn it_should_map_errors_to_status_and_message(
        #[case] error: ApplicationError,
        #[case] status: StatusCode,
        #[case] message: &str,
    ) {
        let (actual_status, body) = body_of(error).await;
        assert_eq!(actual_status, status);
        assert_eq!(body["error"], message);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_hide_backend_details() {
        let error = ApplicationError::Repository(RepositoryError::Backend(
            "disk I/O error at /var/lib/timesheets.db".into(),
        ));
        let (status, body) = body_of(error).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], INTERNAL_MESSAGE);
    }

    #[rstest]
    fn it_should_tag_graphql_errors_with_a_code() {
        let error = ApplicationError::Forbidden.extend();
        assert_eq!(error.message, "forbidden");
        let extensions = error.extensions.unwrap();
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("FORBIDDEN"))
        );
    }
}
