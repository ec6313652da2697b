//! Assignment use-case service.
//!
//! # Invariants
//! - Both ids must resolve before the link row is inserted.
//! - A duplicate pair fails with `AlreadyAssigned` and leaves exactly
//!   one row behind.

use crate::model::employee::{Employee, EmployeeId};
use crate::model::task::{Task, TaskId};
use crate::repo::assignment_repo::AssignmentRepository;
use crate::repo::employee_repo::EmployeeRepository;
use crate::repo::task_repo::TaskRepository;
use crate::repo::{RepoError, RepoResult};

/// Use-case service linking employees to tasks.
pub struct AssignmentService<E, T, A>
where
    E: EmployeeRepository,
    T: TaskRepository,
    A: AssignmentRepository,
{
    employees: E,
    tasks: T,
    assignments: A,
}

impl<E, T, A> AssignmentService<E, T, A>
where
    E: EmployeeRepository,
    T: TaskRepository,
    A: AssignmentRepository,
{
    pub fn new(employees: E, tasks: T, assignments: A) -> Self {
        Self {
            employees,
            tasks,
            assignments,
        }
    }

    /// Links an employee to a task.
    ///
    /// Returns the resolved records so callers can render names without
    /// extra queries. Canonical argument order is
    /// `(employee_id, task_id)`.
    pub fn assign(
        &self,
        employee_id: EmployeeId,
        task_id: TaskId,
    ) -> RepoResult<(Employee, Task)> {
        let employee = self
            .employees
            .get_employee(employee_id)?
            .ok_or(RepoError::EmployeeNotFound(employee_id))?;
        let task = self
            .tasks
            .get_task(task_id)?
            .ok_or(RepoError::TaskNotFound(task_id))?;

        self.assignments.assign(employee_id, task_id)?;

        Ok((employee, task))
    }
}
