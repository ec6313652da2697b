//! Employee/task assignment repository.
//!
//! Canonical argument order throughout the core API is
//! `(employee_id, task_id)`, matching the composite primary key of the
//! `employee_task` table.
//!
//! # Invariants
//! - A given `(employee_id, task_id)` pair exists at most once.
//! - Duplicate assignment is a deterministic `AlreadyAssigned` error,
//!   never a silent no-op.

use super::task_repo::{parse_task_row, TASK_SELECT_SQL};
use super::{RepoError, RepoResult};
use crate::model::employee::EmployeeId;
use crate::model::task::{Task, TaskId};
use rusqlite::{params, Connection};

/// Repository interface for the employee/task link table.
pub trait AssignmentRepository {
    fn assign(&self, employee_id: EmployeeId, task_id: TaskId) -> RepoResult<()>;
    fn tasks_for_employee(&self, employee_id: EmployeeId) -> RepoResult<Vec<Task>>;
}

/// SQLite-backed assignment repository.
pub struct SqliteAssignmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAssignmentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn pair_exists(&self, employee_id: EmployeeId, task_id: TaskId) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM employee_task WHERE employee_id = ?1 AND task_id = ?2
            );",
            params![employee_id, task_id],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }
}

impl AssignmentRepository for SqliteAssignmentRepository<'_> {
    fn assign(&self, employee_id: EmployeeId, task_id: TaskId) -> RepoResult<()> {
        if self.pair_exists(employee_id, task_id)? {
            return Err(RepoError::AlreadyAssigned {
                employee_id,
                task_id,
            });
        }

        // Foreign keys are ON, so a dangling id still cannot slip through
        // even when callers skip the service-level existence checks.
        self.conn.execute(
            "INSERT INTO employee_task (employee_id, task_id) VALUES (?1, ?2);",
            params![employee_id, task_id],
        )?;

        Ok(())
    }

    fn tasks_for_employee(&self, employee_id: EmployeeId) -> RepoResult<Vec<Task>> {
        let mut stmt = self.conn.prepare(&format!(
            "{TASK_SELECT_SQL}
             JOIN employee_task ON employee_task.task_id = tasks.id
             WHERE employee_task.employee_id = ?1
             ORDER BY tasks.id;"
        ))?;

        let mut rows = stmt.query(params![employee_id])?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }
}
