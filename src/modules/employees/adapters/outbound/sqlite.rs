use async_trait::async_trait;
use rusqlite::{OptionalExtension, Row, params};

use crate::modules::employees::core::employee::{Employee, HrAccount, NewEmployee};
use crate::modules::employees::core::ports::{EmployeeDirectory, HrAccounts};
use crate::shared::core::errors::RepositoryError;
use crate::shared::infrastructure::sqlite::{SqliteDatabase, instant_from_millis};

const SELECT_EMPLOYEE: &str =
    "SELECT id, name, department, pin_hash, created_at_ms FROM employees";

fn employee_from_row(row: &Row<'_>) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get(0)?,
        name: row.get(1)?,
        department: row.get(2)?,
        pin_hash: row.get(3)?,
        created_at: instant_from_millis(row.get(4)?),
    })
}

#[async_trait]
impl EmployeeDirectory for SqliteDatabase {
    async fn find_employee(&self, id: i64) -> Result<Option<Employee>, RepositoryError> {
        self.with_conn(|conn| {
            conn.query_row(
                &format!("{SELECT_EMPLOYEE} WHERE id = ?1"),
                params![id],
                employee_from_row,
            )
            .optional()
        })
        .await
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, RepositoryError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!("{SELECT_EMPLOYEE} ORDER BY id"))?;
            let rows = stmt.query_map([], employee_from_row)?;
            rows.collect()
        })
        .await
    }

    async fn create_employee(&self, employee: NewEmployee) -> Result<Employee, RepositoryError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO employees (name, department, pin_hash, created_at_ms) \
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    employee.name,
                    employee.department,
                    employee.pin_hash,
                    employee.created_at.timestamp_millis()
                ],
            )?;
            Ok(Employee {
                id: conn.last_insert_rowid(),
                name: employee.name,
                department: employee.department,
                pin_hash: employee.pin_hash,
                created_at: employee.created_at,
            })
        })
        .await
    }

    /// Owned rows go with the employee through ON DELETE CASCADE.
    async fn delete_employee(&self, id: i64) -> Result<bool, RepositoryError> {
        let deleted = self
            .with_conn(|conn| conn.execute("DELETE FROM employees WHERE id = ?1", params![id]))
            .await?;
        Ok(deleted == 1)
    }
}

#[async_trait]
impl HrAccounts for SqliteDatabase {
    async fn find_hr_account(&self, name: &str) -> Result<Option<HrAccount>, RepositoryError> {
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT id, name, pin_hash FROM hr_users WHERE name = ?1",
                params![name],
                |row| {
                    Ok(HrAccount {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        pin_hash: row.get(2)?,
                    })
                },
            )
            .optional()
        })
        .await
    }

    async fn save_hr_account(
        &self,
        name: &str,
        pin_hash: &str,
    ) -> Result<HrAccount, RepositoryError> {
        self.with_conn(|conn| {
            let id: i64 = conn.query_row(
                "INSERT INTO hr_users (name, pin_hash) VALUES (?1, ?2) \
                 ON CONFLICT(name) DO UPDATE SET pin_hash = excluded.pin_hash \
                 RETURNING id",
                params![name, pin_hash],
                |row| row.get(0),
            )?;
            Ok(HrAccount {
                id,
                name: name.to_string(),
                pin_hash: pin_hash.to_string(),
            })
        })
        .await
    }
}
