//! Project use-case service.

use crate::model::project::{NewProject, Project, ProjectId};
use crate::model::task::TaskCounts;
use crate::repo::project_repo::ProjectRepository;
use crate::repo::task_repo::TaskRepository;
use crate::repo::RepoResult;

/// One project together with its task tallies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOverview {
    pub project: Project,
    pub counts: TaskCounts,
}

impl ProjectOverview {
    pub fn progress_percent(&self) -> f64 {
        self.counts.progress_percent()
    }
}

/// Use-case service for project creation and progress listing.
pub struct ProjectService<P: ProjectRepository, T: TaskRepository> {
    projects: P,
    tasks: T,
}

impl<P: ProjectRepository, T: TaskRepository> ProjectService<P, T> {
    pub fn new(projects: P, tasks: T) -> Self {
        Self { projects, tasks }
    }

    /// Creates a project through repository persistence.
    pub fn create_project(&self, project: &NewProject) -> RepoResult<ProjectId> {
        self.projects.create_project(project)
    }

    /// Lists every project with its completion tallies, ordered by id.
    pub fn list_projects(&self) -> RepoResult<Vec<ProjectOverview>> {
        let mut overviews = Vec::new();
        for project in self.projects.list_projects()? {
            let counts = self.tasks.counts_for_project(project.id)?;
            overviews.push(ProjectOverview { project, counts });
        }
        Ok(overviews)
    }
}
