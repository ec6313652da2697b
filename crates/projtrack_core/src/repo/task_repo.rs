//! Task repository contract and SQLite implementation.
//!
//! # Invariants
//! - `create_task` refuses a `project_id` that does not resolve, before
//!   the insert is attempted.
//! - Tasks are inserted pending; completion changes only through
//!   `set_completed`.

use super::{bool_to_int, date_to_db, parse_db_bool, parse_db_date, RepoError, RepoResult};
use crate::model::project::ProjectId;
use crate::model::task::{NewTask, Priority, Task, TaskCounts, TaskId};
use rusqlite::{params, Connection, Row};

pub(crate) const TASK_SELECT_SQL: &str =
    "SELECT id, title, description, deadline, priority, completed, project_id FROM tasks";

/// Repository interface for task persistence and tallies.
pub trait TaskRepository {
    fn create_task(&self, task: &NewTask) -> RepoResult<TaskId>;
    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>>;
    fn list_pending_tasks(&self) -> RepoResult<Vec<Task>>;
    fn set_completed(&self, id: TaskId, completed: bool) -> RepoResult<()>;
    fn counts_for_project(&self, id: ProjectId) -> RepoResult<TaskCounts>;
    fn overall_counts(&self) -> RepoResult<TaskCounts>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn project_exists(&self, id: ProjectId) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM projects WHERE id = ?1);",
            params![id],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn create_task(&self, task: &NewTask) -> RepoResult<TaskId> {
        task.validate()?;

        if !self.project_exists(task.project_id)? {
            return Err(RepoError::ProjectNotFound(task.project_id));
        }

        self.conn.execute(
            "INSERT INTO tasks (title, description, deadline, priority, completed, project_id)
             VALUES (?1, ?2, ?3, ?4, 0, ?5);",
            params![
                task.title.as_str(),
                task.description.as_deref(),
                date_to_db(task.deadline),
                priority_to_db(task.priority),
                task.project_id,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_task_row(row)?));
        }

        Ok(None)
    }

    fn list_pending_tasks(&self) -> RepoResult<Vec<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} WHERE completed = 0 ORDER BY id;"))?;

        let mut rows = stmt.query([])?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }

    fn set_completed(&self, id: TaskId, completed: bool) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE tasks SET completed = ?1 WHERE id = ?2;",
            params![bool_to_int(completed), id],
        )?;

        if changed == 0 {
            return Err(RepoError::TaskNotFound(id));
        }

        Ok(())
    }

    fn counts_for_project(&self, id: ProjectId) -> RepoResult<TaskCounts> {
        let counts = self.conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(completed), 0) FROM tasks WHERE project_id = ?1;",
            params![id],
            |row| {
                Ok(TaskCounts {
                    total: row.get(0)?,
                    completed: row.get(1)?,
                })
            },
        )?;
        Ok(counts)
    }

    fn overall_counts(&self) -> RepoResult<TaskCounts> {
        let counts = self.conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(completed), 0) FROM tasks;",
            [],
            |row| {
                Ok(TaskCounts {
                    total: row.get(0)?,
                    completed: row.get(1)?,
                })
            },
        )?;
        Ok(counts)
    }
}

pub(crate) fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let priority_text: String = row.get("priority")?;
    let priority = parse_priority(&priority_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid priority `{priority_text}` in tasks.priority"
        ))
    })?;

    Ok(Task {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        deadline: parse_db_date("tasks.deadline", row.get("deadline")?)?,
        priority,
        completed: parse_db_bool("tasks.completed", row.get("completed")?)?,
        project_id: row.get("project_id")?,
    })
}

fn priority_to_db(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "low",
        Priority::Medium => "medium",
        Priority::High => "high",
    }
}

fn parse_priority(value: &str) -> Option<Priority> {
    match value {
        "low" => Some(Priority::Low),
        "medium" => Some(Priority::Medium),
        "high" => Some(Priority::High),
        _ => None,
    }
}
