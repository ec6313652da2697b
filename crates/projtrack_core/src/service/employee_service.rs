//! Employee use-case service.
//!
//! # Invariants
//! - Workload lookups fail with `EmployeeNotFound` for absent ids
//!   instead of returning an empty list.

use crate::model::employee::{Employee, EmployeeId, NewEmployee};
use crate::model::task::Task;
use crate::repo::assignment_repo::AssignmentRepository;
use crate::repo::employee_repo::EmployeeRepository;
use crate::repo::{RepoError, RepoResult};

/// Use-case service for employee creation and workload queries.
pub struct EmployeeService<E: EmployeeRepository, A: AssignmentRepository> {
    employees: E,
    assignments: A,
}

impl<E: EmployeeRepository, A: AssignmentRepository> EmployeeService<E, A> {
    pub fn new(employees: E, assignments: A) -> Self {
        Self { employees, assignments }
    }

    /// Creates an employee through repository persistence.
    pub fn create_employee(&self, employee: &NewEmployee) -> RepoResult<EmployeeId> {
        self.employees.create_employee(employee)
    }

    /// Returns the employee and every task linked via assignment.
    ///
    /// Each task carries its `completed` flag, so callers can render
    /// per-task status without extra queries.
    pub fn workload(&self, employee_id: EmployeeId) -> RepoResult<(Employee, Vec<Task>)> {
        let employee = self
            .employees
            .get_employee(employee_id)?
            .ok_or(RepoError::EmployeeNotFound(employee_id))?;
        let tasks = self.assignments.tasks_for_employee(employee_id)?;
        Ok((employee, tasks))
    }
}
