use serde::{Deserialize, Serialize};

use crate::shared::core::errors::ApplicationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Hr,
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Hr => "hr",
            Role::Employee => "employee",
        }
    }
}

/// The caller, as resolved from a verified token for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub role: Role,
    pub employee_id: Option<i64>,
    pub name: String,
}

impl Identity {
    pub fn hr(name: impl Into<String>) -> Self {
        Self {
            role: Role::Hr,
            employee_id: None,
            name: name.into(),
        }
    }

    pub fn employee(employee_id: i64, name: impl Into<String>) -> Self {
        Self {
            role: Role::Employee,
            employee_id: Some(employee_id),
            name: name.into(),
        }
    }

    pub fn is_hr(&self) -> bool {
        self.role == Role::Hr
    }

    /// HR may act on anyone; an employee only on themselves.
    pub fn ensure_can_access(&self, employee_id: i64) -> Result<(), ApplicationError> {
        if self.is_hr() || self.employee_id == Some(employee_id) {
            Ok(())
        } else {
            Err(ApplicationError::Forbidden)
        }
    }

    pub fn ensure_hr(&self) -> Result<(), ApplicationError> {
        if self.is_hr() {
            Ok(())
        } else {
            Err(ApplicationError::Forbidden)
        }
    }
}
