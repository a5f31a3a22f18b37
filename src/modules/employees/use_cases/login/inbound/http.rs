use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::Deserialize;

use crate::modules::employees::use_cases::login::handler::Session;
use crate::shared::core::errors::ApplicationError;
use crate::shell::errors::invalid_body;
use crate::shell::state::AppState;

#[derive(Debug, Deserialize)]
pub struct HrLoginBody {
    pub name: String,
    pub pin: String,
}

#[derive(Debug, Deserialize)]
pub struct EmployeeLoginBody {
    pub id: i64,
    pub pin: String,
}

pub async fn hr(
    State(state): State<AppState>,
    body: Result<Json<HrLoginBody>, JsonRejection>,
) -> Result<Json<Session>, ApplicationError> {
    let Json(body) = body.map_err(invalid_body)?;
    let session = state.login.login_hr(&body.name, &body.pin).await?;
    Ok(Json(session))
}

pub async fn employee(
    State(state): State<AppState>,
    body: Result<Json<EmployeeLoginBody>, JsonRejection>,
) -> Result<Json<Session>, ApplicationError> {
    let Json(body) = body.map_err(invalid_body)?;
    let session = state.login.login_employee(body.id, &body.pin).await?;
    Ok(Json(session))
}
