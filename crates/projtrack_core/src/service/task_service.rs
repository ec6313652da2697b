//! Task use-case service.

use crate::model::task::{NewTask, Task, TaskId};
use crate::repo::task_repo::TaskRepository;
use crate::repo::{RepoError, RepoResult};

/// Use-case service for task creation, listing and completion.
pub struct TaskService<T: TaskRepository> {
    tasks: T,
}

impl<T: TaskRepository> TaskService<T> {
    pub fn new(tasks: T) -> Self {
        Self { tasks }
    }

    /// Creates a pending task under an existing project.
    ///
    /// Fails with `ProjectNotFound` when the project id does not
    /// resolve.
    pub fn create_task(&self, task: &NewTask) -> RepoResult<TaskId> {
        self.tasks.create_task(task)
    }

    /// Lists every task not yet completed, ordered by id.
    pub fn list_pending_tasks(&self) -> RepoResult<Vec<Task>> {
        self.tasks.list_pending_tasks()
    }

    /// Marks one task as completed and returns the updated record.
    ///
    /// Completing an already-completed task is accepted and changes
    /// nothing.
    pub fn complete_task(&self, id: TaskId) -> RepoResult<Task> {
        let mut task = self
            .tasks
            .get_task(id)?
            .ok_or(RepoError::TaskNotFound(id))?;
        self.tasks.set_completed(id, true)?;
        task.completed = true;
        Ok(task)
    }
}
