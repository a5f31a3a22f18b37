use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub department: Option<String>,
    pub pin_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub department: Option<String>,
    pub pin_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HrAccount {
    pub id: i64,
    pub name: String,
    pub pin_hash: String,
}

/// What callers get to see of an employee. Never carries the PIN hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeView {
    pub id: i64,
    pub name: String,
    pub department: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Employee> for EmployeeView {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            department: employee.department,
            created_at: employee.created_at,
        }
    }
}
