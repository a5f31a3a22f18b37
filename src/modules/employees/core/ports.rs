// Ports for the employee directory and HR accounts.
//
// Responsibilities
// - delete_employee removes the employee together with every time entry,
//   timesheet and daily note they own, and reports whether anything was deleted.
// - save_hr_account inserts or replaces the PIN of the account with that name.

use async_trait::async_trait;

use crate::modules::employees::core::employee::{Employee, HrAccount, NewEmployee};
use crate::shared::core::errors::RepositoryError;

#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    async fn find_employee(&self, id: i64) -> Result<Option<Employee>, RepositoryError>;

    async fn list_employees(&self) -> Result<Vec<Employee>, RepositoryError>;

    async fn create_employee(&self, employee: NewEmployee) -> Result<Employee, RepositoryError>;

    async fn delete_employee(&self, id: i64) -> Result<bool, RepositoryError>;
}

#[async_trait]
pub trait HrAccounts: Send + Sync {
    async fn find_hr_account(&self, name: &str) -> Result<Option<HrAccount>, RepositoryError>;

    async fn save_hr_account(
        &self,
        name: &str,
        pin_hash: &str,
    ) -> Result<HrAccount, RepositoryError>;
}
