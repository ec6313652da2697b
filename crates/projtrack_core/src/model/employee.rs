//! Employee domain model.

use super::ValidationError;
use serde::{Deserialize, Serialize};

/// Surrogate id assigned by SQLite on insert.
pub type EmployeeId = i64;

/// Loaded employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub role: Option<String>,
}

/// Insert shape for an employee; the id is assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub role: Option<String>,
}

impl NewEmployee {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::BlankEmployeeName);
        }
        Ok(())
    }
}
