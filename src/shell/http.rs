use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Json, Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    response::Html,
    routing::{delete, get, post, put},
};
use serde_json::{Value, json};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use uuid::Uuid;

use crate::modules::audit::use_cases::list_audit_records::inbound::http as audit_http;
use crate::modules::employees::use_cases::login::inbound::http as login_http;
use crate::modules::employees::use_cases::manage_employees::inbound::http as employees_http;
use crate::modules::time_tracking::use_cases::start_shift::inbound::http as start_http;
use crate::modules::time_tracking::use_cases::stop_shift::inbound::http as stop_http;
use crate::modules::time_tracking::use_cases::time_summary::inbound::http as summary_http;
use crate::modules::timesheets::use_cases::decide_timesheet::inbound::http as decide_http;
use crate::modules::timesheets::use_cases::export_timesheets::inbound::http as export_http;
use crate::modules::timesheets::use_cases::list_timesheets::inbound::http as list_http;
use crate::modules::timesheets::use_cases::set_note::inbound::http as note_http;
use crate::modules::timesheets::use_cases::submit_timesheet::inbound::http as submit_http;
use crate::modules::timesheets::use_cases::week_view::inbound::http as week_http;
use crate::shared::core::errors::ApplicationError;
use crate::shell::auth::bearer_identity;
use crate::shell::graphql::{AppSchema, build_schema};
use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/gql";

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/health", get(health))
        .route("/auth/hr/login", post(login_http::hr))
        .route("/auth/employee/login", post(login_http::employee))
        .route("/employees", get(employees_http::list).post(employees_http::create))
        .route("/employees/{id}", delete(employees_http::delete))
        .route("/employees/{id}/time/start", post(start_http::handle))
        .route("/employees/{id}/time/stop", post(stop_http::handle))
        .route("/employees/{id}/time/summary", get(summary_http::handle))
        .route("/employees/{id}/timesheet/week", get(week_http::handle))
        .route("/employees/{id}/timesheet/note", put(note_http::handle))
        .route("/employees/{id}/timesheet/submit", post(submit_http::handle))
        .route("/timesheets", get(list_http::handle))
        .route("/timesheets/export.csv", get(export_http::handle))
        .route("/timesheets/{id}/decision", post(decide_http::handle))
        .route("/audit", get(audit_http::handle))
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            let request_id = Uuid::now_v7();
            tracing::info_span!(
                "request",
                %request_id,
                method = %request.method(),
                uri = %request.uri(),
            )
        }))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Runs a GraphQL request as the bearer of the Authorization header, if any.
async fn graphql(
    State(state): State<AppState>,
    Extension(schema): Extension<AppSchema>,
    headers: HeaderMap,
    request: GraphQLRequest,
) -> Result<GraphQLResponse, ApplicationError> {
    let mut request = request.into_inner();
    if let Some(identity) = bearer_identity(&headers, &state)? {
        request = request.data(identity);
    }
    Ok(schema.execute(request).await.into())
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
