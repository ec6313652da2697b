//! Domain model for projects, employees, tasks and their link.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep insert shapes (`New*`) separate from loaded records, so
//!   database-assigned ids are never faked on the way in.
//!
//! # Invariants
//! - Every record is identified by a SQLite integer rowid.
//! - Required text fields must not be blank after trim.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod employee;
pub mod project;
pub mod task;

/// Domain validation failure raised before any SQL mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Project name is blank after trim.
    BlankProjectName,
    /// Employee name is blank after trim.
    BlankEmployeeName,
    /// Task title is blank after trim.
    BlankTaskTitle,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankProjectName => write!(f, "project name must not be blank"),
            Self::BlankEmployeeName => write!(f, "employee name must not be blank"),
            Self::BlankTaskTitle => write!(f, "task title must not be blank"),
        }
    }
}

impl Error for ValidationError {}
