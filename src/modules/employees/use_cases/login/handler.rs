// PIN login for HR and employees.
//
// Responsibilities
// - Check the PIN against the stored salted hash and issue a signed token.
// - Fail every mismatch the same way so callers cannot tell which names or
//   ids exist.

use serde::Serialize;
use std::sync::Arc;

use crate::modules::employees::core::ports::{EmployeeDirectory, HrAccounts};
use crate::shared::auth::identity::{Identity, Role};
use crate::shared::auth::pin::verify_pin;
use crate::shared::auth::token::TokenSigner;
use crate::shared::core::clock::Clock;
use crate::shared::core::errors::{ApplicationError, ApplicationResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub token: String,
    pub role: Role,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i64>,
}

pub struct LoginHandler {
    employees: Arc<dyn EmployeeDirectory>,
    hr_accounts: Arc<dyn HrAccounts>,
    signer: TokenSigner,
    clock: Arc<dyn Clock>,
}

impl LoginHandler {
    pub fn new(
        employees: Arc<dyn EmployeeDirectory>,
        hr_accounts: Arc<dyn HrAccounts>,
        signer: TokenSigner,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            employees,
            hr_accounts,
            signer,
            clock,
        }
    }

    pub async fn login_hr(&self, name: &str, pin: &str) -> ApplicationResult<Session> {
        let account = self
            .hr_accounts
            .find_hr_account(name.trim())
            .await?
            .filter(|account| verify_pin(pin, &account.pin_hash))
            .ok_or(ApplicationError::InvalidCredentials)?;
        tracing::info!(name = %account.name, "hr signed in");
        self.session(Identity::hr(account.name))
    }

    pub async fn login_employee(&self, employee_id: i64, pin: &str) -> ApplicationResult<Session> {
        let employee = self
            .employees
            .find_employee(employee_id)
            .await?
            .filter(|employee| verify_pin(pin, &employee.pin_hash))
            .ok_or(ApplicationError::InvalidCredentials)?;
        tracing::info!(employee_id, "employee signed in");
        self.session(Identity::employee(employee.id, employee.name))
    }

    fn session(&self, identity: Identity) -> ApplicationResult<Session> {
        let token = self
            .signer
            .issue(&identity, self.clock.now())
            .map_err(|error| ApplicationError::Internal(error.to_string()))?;
        Ok(Session {
            token,
            role: identity.role,
            name: identity.name,
            employee_id: identity.employee_id,
        })
    }
}
