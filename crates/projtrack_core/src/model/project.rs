//! Project domain model.
//!
//! # Invariants
//! - `name` must not be blank.
//! - A project owns zero or more tasks; tasks reference it by id.

use super::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Surrogate id assigned by SQLite on insert.
pub type ProjectId = i64;

/// Loaded project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: Option<String>,
    pub deadline: Option<NaiveDate>,
}

/// Insert shape for a project; the id is assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
    pub deadline: Option<NaiveDate>,
}

impl NewProject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            deadline: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::BlankProjectName);
        }
        Ok(())
    }
}
