use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use chrono::SecondsFormat;

use crate::modules::employees::core::employee::EmployeeView;
use crate::modules::employees::use_cases::login::handler::Session;
use crate::modules::employees::use_cases::manage_employees::handler::CreateEmployee;
use crate::shell::graphql::{caller, gql_error, state};

#[derive(SimpleObject, Clone)]
pub struct GqlSession {
    pub token: String,
    pub role: String,
    pub name: String,
    pub employee_id: Option<i64>,
}

impl From<Session> for GqlSession {
    fn from(s: Session) -> Self {
        Self {
            token: s.token,
            role: s.role.as_str().to_string(),
            name: s.name,
            employee_id: s.employee_id,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlEmployee {
    pub id: i64,
    pub name: String,
    pub department: Option<String>,
    pub created_at: String,
}

impl From<EmployeeView> for GqlEmployee {
    fn from(e: EmployeeView) -> Self {
        Self {
            id: e.id,
            name: e.name,
            department: e.department,
            created_at: e.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

#[derive(Default)]
pub struct EmployeesQuery;

#[Object]
impl EmployeesQuery {
    async fn employees(&self, context: &Context<'_>) -> GqlResult<Vec<GqlEmployee>> {
        let (state, actor) = caller(context)?;
        let employees = state.manage_employees.list(actor).await.map_err(gql_error)?;
        Ok(employees.into_iter().map(Into::into).collect())
    }
}

#[derive(Default)]
pub struct EmployeesMutation;

#[Object]
impl EmployeesMutation {
    /// Anonymous: returns a bearer token for the HR account.
    async fn login_hr(&self, context: &Context<'_>, name: String, pin: String) -> GqlResult<GqlSession> {
        let session = state(context)
            .login
            .login_hr(&name, &pin)
            .await
            .map_err(gql_error)?;
        Ok(session.into())
    }

    async fn login_employee(
        &self,
        context: &Context<'_>,
        id: i64,
        pin: String,
    ) -> GqlResult<GqlSession> {
        let session = state(context)
            .login
            .login_employee(id, &pin)
            .await
            .map_err(gql_error)?;
        Ok(session.into())
    }

    async fn create_employee(
        &self,
        context: &Context<'_>,
        name: String,
        department: Option<String>,
        pin: String,
    ) -> GqlResult<GqlEmployee> {
        let (state, actor) = caller(context)?;
        let employee = state
            .manage_employees
            .create(actor, CreateEmployee { name, department, pin })
            .await
            .map_err(gql_error)?;
        Ok(employee.into())
    }

    async fn delete_employee(&self, context: &Context<'_>, id: i64) -> GqlResult<bool> {
        let (state, actor) = caller(context)?;
        state
            .manage_employees
            .delete(actor, id)
            .await
            .map_err(gql_error)?;
        Ok(true)
    }
}
