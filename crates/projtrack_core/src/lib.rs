//! Core domain logic for projtrack.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging};
pub use model::employee::{Employee, EmployeeId, NewEmployee};
pub use model::project::{NewProject, Project, ProjectId};
pub use model::task::{NewTask, ParsePriorityError, Priority, Task, TaskCounts, TaskId};
pub use model::ValidationError;
pub use repo::assignment_repo::{AssignmentRepository, SqliteAssignmentRepository};
pub use repo::employee_repo::{EmployeeRepository, SqliteEmployeeRepository};
pub use repo::project_repo::{ProjectRepository, SqliteProjectRepository};
pub use repo::task_repo::{SqliteTaskRepository, TaskRepository};
pub use repo::{RepoError, RepoResult};
pub use service::assignment_service::AssignmentService;
pub use service::employee_service::EmployeeService;
pub use service::project_service::{ProjectOverview, ProjectService};
pub use service::report::{generate_report, EmployeeLoad, Report};
pub use service::task_service::TaskService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
