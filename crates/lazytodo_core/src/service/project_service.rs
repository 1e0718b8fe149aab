//! Project use-case service.
//!
//! # Responsibility
//! - Join a project with its tasks for detail views.
//!
//! # Invariants
//! - Membership comes from filtering tasks on `project_id`; the stored
//!   `Project::tasks` list is ignored.

use crate::model::project::Project;
use crate::model::task::Task;
use crate::repo::project_repo::ProjectRepository;
use crate::repo::task_repo::TaskRepository;
use crate::store::StoreResult;

/// Project plus the tasks currently pointing at it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDetail {
    pub project: Project,
    /// Insertion order of the task collection.
    pub tasks: Vec<Task>,
}

pub struct ProjectService<P: ProjectRepository, T: TaskRepository> {
    projects: P,
    tasks: T,
}

impl<P: ProjectRepository, T: TaskRepository> ProjectService<P, T> {
    pub fn new(projects: P, tasks: T) -> Self {
        Self { projects, tasks }
    }

    /// Returns `None` when the project does not exist.
    pub fn project_detail(&self, id: &str) -> StoreResult<Option<ProjectDetail>> {
        let Some(project) = self.projects.get_project(id)? else {
            return Ok(None);
        };
        let mut tasks = self.tasks.list_tasks()?;
        tasks.retain(|task| task.project_id.as_deref() == Some(id));
        Ok(Some(ProjectDetail { project, tasks }))
    }

    /// Tasks whose `project_id` names no existing project.
    ///
    /// Project deletion does not cascade, so these accumulate over time.
    pub fn orphaned_tasks(&self) -> StoreResult<Vec<Task>> {
        let projects = self.projects.list_projects()?;
        let mut tasks = self.tasks.list_tasks()?;
        tasks.retain(|task| match task.project_id.as_deref() {
            Some(project_id) => !projects.iter().any(|project| project.id == project_id),
            None => false,
        });
        Ok(tasks)
    }
}
