//! Task use-case service.
//!
//! # Responsibility
//! - Provide the toggle/archive shortcuts task pages use.
//! - Provide active/archived/per-project task views.
//!
//! # Invariants
//! - Active and archived views are ordered newest `created_at` first.
//! - The per-project view keeps insertion order.

use crate::model::task::{Task, TaskPatch};
use crate::repo::task_repo::TaskRepository;
use crate::service::sort_newest_first;
use crate::store::StoreResult;

/// Use-case service wrapper for task operations.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Flips `completed` on one task.
    ///
    /// Completing counts toward analytics the same way a direct update
    /// does; un-completing does not decrement anything.
    pub fn toggle_completed(&self, id: &str) -> StoreResult<Option<Task>> {
        let Some(task) = self.repo.get_task(id)? else {
            return Ok(None);
        };
        self.repo
            .update_task(id, TaskPatch::completed(!task.completed))
    }

    /// Marks one task archived.
    pub fn archive(&self, id: &str) -> StoreResult<Option<Task>> {
        self.repo.update_task(id, TaskPatch::archived(true))
    }

    /// Non-archived tasks, newest first.
    pub fn list_active(&self) -> StoreResult<Vec<Task>> {
        self.list_filtered(|task| !task.archived)
    }

    /// Archived tasks, newest first.
    pub fn list_archived(&self) -> StoreResult<Vec<Task>> {
        self.list_filtered(|task| task.archived)
    }

    /// Tasks whose weak `project_id` points at `project_id`.
    pub fn list_for_project(&self, project_id: &str) -> StoreResult<Vec<Task>> {
        let mut tasks = self.repo.list_tasks()?;
        tasks.retain(|task| task.project_id.as_deref() == Some(project_id));
        Ok(tasks)
    }

    fn list_filtered(&self, keep: impl Fn(&Task) -> bool) -> StoreResult<Vec<Task>> {
        let mut tasks = self.repo.list_tasks()?;
        tasks.retain(|task| keep(task));
        sort_newest_first(&mut tasks, |task| task.created_at.as_str());
        Ok(tasks)
    }
}
