use std::sync::Arc;

use crate::modules::audit::core::audit_record::NewAuditRecord;
use crate::modules::audit::core::ports::{AuditTrail, record_best_effort};
use crate::modules::employees::core::employee::{EmployeeView, HrAccount, NewEmployee};
use crate::modules::employees::core::ports::{EmployeeDirectory, HrAccounts};
use crate::shared::auth::identity::Identity;
use crate::shared::auth::pin::{hash_pin, is_valid_pin};
use crate::shared::core::clock::Clock;
use crate::shared::core::errors::{ApplicationError, ApplicationResult};

const MAX_NAME_LEN: usize = 120;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEmployee {
    pub name: String,
    pub department: Option<String>,
    pub pin: String,
}

impl CreateEmployee {
    fn validated(self) -> ApplicationResult<Self> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ApplicationError::validation("name is required"));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(ApplicationError::validation("name is too long"));
        }
        if !is_valid_pin(&self.pin) {
            return Err(ApplicationError::validation("pin must be 4 to 12 digits"));
        }
        let department = self
            .department
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        Ok(Self {
            name,
            department,
            pin: self.pin,
        })
    }
}

pub struct ManageEmployeesHandler {
    employees: Arc<dyn EmployeeDirectory>,
    audit: Arc<dyn AuditTrail>,
    clock: Arc<dyn Clock>,
}

impl ManageEmployeesHandler {
    pub fn new(
        employees: Arc<dyn EmployeeDirectory>,
        audit: Arc<dyn AuditTrail>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            employees,
            audit,
            clock,
        }
    }

    pub async fn create(
        &self,
        actor: &Identity,
        request: CreateEmployee,
    ) -> ApplicationResult<EmployeeView> {
        actor.ensure_hr()?;
        let request = request.validated()?;
        let now = self.clock.now();

        let employee = self
            .employees
            .create_employee(NewEmployee {
                name: request.name,
                department: request.department,
                pin_hash: hash_pin(&request.pin)?,
                created_at: now,
            })
            .await?;

        tracing::info!(employee_id = employee.id, "employee created");
        record_best_effort(
            &*self.audit,
            NewAuditRecord::by(actor, "employee.create", "employee", Some(employee.id), now),
        )
        .await;

        Ok(employee.into())
    }

    pub async fn list(&self, actor: &Identity) -> ApplicationResult<Vec<EmployeeView>> {
        actor.ensure_hr()?;
        let employees = self.employees.list_employees().await?;
        Ok(employees.into_iter().map(EmployeeView::from).collect())
    }

    /// Removes the employee with all their entries, timesheets and notes.
    pub async fn delete(&self, actor: &Identity, employee_id: i64) -> ApplicationResult<()> {
        actor.ensure_hr()?;
        if !self.employees.delete_employee(employee_id).await? {
            return Err(ApplicationError::NotFound("employee"));
        }

        tracing::info!(employee_id, "employee deleted");
        record_best_effort(
            &*self.audit,
            NewAuditRecord::by(
                actor,
                "employee.delete",
                "employee",
                Some(employee_id),
                self.clock.now(),
            ),
        )
        .await;
        Ok(())
    }
}

/// Creates or re-keys the named HR account at startup.
pub async fn bootstrap_hr_account(
    hr_accounts: &dyn HrAccounts,
    name: &str,
    pin: &str,
) -> ApplicationResult<HrAccount> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ApplicationError::validation("hr name is required"));
    }
    if !is_valid_pin(pin) {
        return Err(ApplicationError::validation("pin must be 4 to 12 digits"));
    }
    let account = hr_accounts.save_hr_account(name, &hash_pin(pin)?).await?;
    tracing::info!(name = %account.name, "hr account ready");
    Ok(account)
}
