use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use serde::Deserialize;

use crate::modules::employees::core::employee::EmployeeView;
use crate::modules::employees::use_cases::manage_employees::handler::CreateEmployee;
use crate::shared::auth::identity::Identity;
use crate::shared::core::errors::ApplicationError;
use crate::shell::errors::{invalid_body, invalid_path};
use crate::shell::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateEmployeeBody {
    pub name: String,
    pub department: Option<String>,
    pub pin: String,
}

pub async fn create(
    State(state): State<AppState>,
    identity: Identity,
    body: Result<Json<CreateEmployeeBody>, JsonRejection>,
) -> Result<(StatusCode, Json<EmployeeView>), ApplicationError> {
    let Json(body) = body.map_err(invalid_body)?;
    let employee = state
        .manage_employees
        .create(
            &identity,
            CreateEmployee {
                name: body.name,
                department: body.department,
                pin: body.pin,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

pub async fn list(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<Vec<EmployeeView>>, ApplicationError> {
    Ok(Json(state.manage_employees.list(&identity).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    identity: Identity,
    employee_id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApplicationError> {
    let Path(employee_id) = employee_id.map_err(invalid_path)?;
    state.manage_employees.delete(&identity, employee_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
