//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep the CLI layer decoupled from storage details.

pub mod assignment_service;
pub mod employee_service;
pub mod project_service;
pub mod report;
pub mod task_service;
