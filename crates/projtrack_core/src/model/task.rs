//! Task domain model and project progress arithmetic.
//!
//! # Invariants
//! - `title` must not be blank.
//! - `completed` starts as `false`; it only changes through an explicit
//!   completion operation.
//! - Every task belongs to exactly one project.

use super::ValidationError;
use crate::model::project::ProjectId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Surrogate id assigned by SQLite on insert.
pub type TaskId = i64;

/// Task urgency level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        };
        write!(f, "{text}")
    }
}

/// Error for priority text that is none of Low/Medium/High.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePriorityError(pub String);

impl Display for ParsePriorityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid priority `{}`; expected Low, Medium or High",
            self.0
        )
    }
}

impl Error for ParsePriorityError {}

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_string())),
        }
    }
}

/// Loaded task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub priority: Priority,
    pub completed: bool,
    pub project_id: ProjectId,
}

/// Insert shape for a task; the id is assigned by storage.
///
/// # Invariants
/// - New tasks are always pending (`completed = false` on insert).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub priority: Priority,
    pub project_id: ProjectId,
}

impl NewTask {
    pub fn new(title: impl Into<String>, priority: Priority, project_id: ProjectId) -> Self {
        Self {
            title: title.into(),
            description: None,
            deadline: None,
            priority,
            project_id,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::BlankTaskTitle);
        }
        Ok(())
    }
}

/// Completed/total tallies for a set of tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCounts {
    pub total: u32,
    pub completed: u32,
}

impl TaskCounts {
    pub fn pending(&self) -> u32 {
        self.total - self.completed
    }

    /// Share of completed tasks, in percent.
    ///
    /// Zero tasks means zero progress rather than a division by zero.
    pub fn progress_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.completed) / f64::from(self.total) * 100.0
    }
}
