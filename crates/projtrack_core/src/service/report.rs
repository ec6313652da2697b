//! Completion report over all tasks and employees.

use crate::model::task::TaskCounts;
use crate::repo::assignment_repo::AssignmentRepository;
use crate::repo::employee_repo::EmployeeRepository;
use crate::repo::task_repo::TaskRepository;
use crate::repo::RepoResult;
use serde::{Deserialize, Serialize};

/// Per-employee completion tallies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeLoad {
    pub name: String,
    pub completed: u32,
    pub assigned: u32,
}

/// Global and per-employee completion report.
///
/// # Invariants
/// - `totals.pending() + totals.completed == totals.total` for every
///   state of the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub totals: TaskCounts,
    pub employees: Vec<EmployeeLoad>,
}

/// Builds the completion report from current persisted state.
pub fn generate_report<E, T, A>(employees: &E, tasks: &T, assignments: &A) -> RepoResult<Report>
where
    E: EmployeeRepository,
    T: TaskRepository,
    A: AssignmentRepository,
{
    let totals = tasks.overall_counts()?;

    let mut loads = Vec::new();
    for employee in employees.list_employees()? {
        let assigned_tasks = assignments.tasks_for_employee(employee.id)?;
        let completed = assigned_tasks.iter().filter(|task| task.completed).count() as u32;
        loads.push(EmployeeLoad {
            name: employee.name,
            completed,
            assigned: assigned_tasks.len() as u32,
        });
    }

    Ok(Report {
        totals,
        employees: loads,
    })
}
