use async_trait::async_trait;

use crate::modules::employees::core::employee::{Employee, HrAccount, NewEmployee};
use crate::modules::employees::core::ports::{EmployeeDirectory, HrAccounts};
use crate::shared::core::errors::RepositoryError;
use crate::shared::infrastructure::in_memory::InMemoryDatabase;

#[async_trait]
impl EmployeeDirectory for InMemoryDatabase {
    async fn find_employee(&self, id: i64) -> Result<Option<Employee>, RepositoryError> {
        let tables = self.read().await?;
        Ok(tables.employees.get(&id).cloned())
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, RepositoryError> {
        let tables = self.read().await?;
        Ok(tables.employees.values().cloned().collect())
    }

    async fn create_employee(&self, employee: NewEmployee) -> Result<Employee, RepositoryError> {
        let mut tables = self.write().await?;
        let id = tables.next_id();
        let stored = Employee {
            id,
            name: employee.name,
            department: employee.department,
            pin_hash: employee.pin_hash,
            created_at: employee.created_at,
        };
        tables.employees.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete_employee(&self, id: i64) -> Result<bool, RepositoryError> {
        let mut tables = self.write().await?;
        if tables.employees.remove(&id).is_none() {
            return Ok(false);
        }
        tables.time_entries.retain(|_, entry| entry.employee_id != id);
        tables.timesheets.retain(|_, timesheet| timesheet.employee_id != id);
        tables.notes.retain(|(employee_id, _), _| *employee_id != id);
        Ok(true)
    }
}

#[async_trait]
impl HrAccounts for InMemoryDatabase {
    async fn find_hr_account(&self, name: &str) -> Result<Option<HrAccount>, RepositoryError> {
        let tables = self.read().await?;
        Ok(tables
            .hr_accounts
            .values()
            .find(|account| account.name == name)
            .cloned())
    }

    async fn save_hr_account(
        &self,
        name: &str,
        pin_hash: &str,
    ) -> Result<HrAccount, RepositoryError> {
        let mut tables = self.write().await?;
        if let Some(account) = tables
            .hr_accounts
            .values_mut()
            .find(|account| account.name == name)
        {
            account.pin_hash = pin_hash.to_string();
            return Ok(account.clone());
        }
        let id = tables.next_id();
        let account = HrAccount {
            id,
            name: name.to_string(),
            pin_hash: pin_hash.to_string(),
        };
        tables.hr_accounts.insert(id, account.clone());
        Ok(account)
    }
}
