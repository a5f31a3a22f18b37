use crate::modules::employees::core::employee::Employee;
use crate::modules::employees::core::ports::EmployeeDirectory;
use crate::shared::auth::identity::Identity;
use crate::shared::core::errors::{ApplicationError, ApplicationResult};

/// Resolves an employee-scoped operation: HR or the employee themself, and the
/// employee must exist. Access is checked first so a forbidden caller learns
/// nothing about which ids exist.
pub async fn resolve_employee(
    directory: &dyn EmployeeDirectory,
    actor: &Identity,
    employee_id: i64,
) -> ApplicationResult<Employee> {
    actor.ensure_can_access(employee_id)?;
    directory
        .find_employee(employee_id)
        .await?
        .ok_or(ApplicationError::NotFound("employee"))
}
