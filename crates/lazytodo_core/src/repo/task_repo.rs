//! Task repository contracts and JSON-store implementation.
//!
//! # Responsibility
//! - Provide CRUD over the task collection plus comment append.
//! - Detect completion/archival transitions and report them to analytics.
//!
//! # Invariants
//! - `tasks_completed` grows only on a `false -> true` edge of `completed`;
//!   `tasks_archived` likewise for `archived`. Reverting never decrements.
//! - Comments are appended in call order and never rewritten.

use super::analytics_repo::{AnalyticsRepository, JsonAnalyticsRepository};
use super::{find_record, insert_record, list_records, remove_record};
use crate::model::analytics::AnalyticsDelta;
use crate::model::ids::{new_id, now_timestamp};
use crate::model::task::{Comment, NewTask, Task, TaskPatch};
use crate::store::{Collection, JsonStore, StoreResult};
use log::debug;

/// Repository interface for task operations.
pub trait TaskRepository {
    /// All tasks in insertion order.
    fn list_tasks(&self) -> StoreResult<Vec<Task>>;
    fn get_task(&self, id: &str) -> StoreResult<Option<Task>>;
    /// Persists a new task and counts it in analytics.
    ///
    /// An error from the analytics save arrives after the task itself was
    /// written, so retrying the call stores a second task.
    fn create_task(&self, input: NewTask) -> StoreResult<Task>;
    /// Returns `None` when no task has `id`.
    fn update_task(&self, id: &str, patch: TaskPatch) -> StoreResult<Option<Task>>;
    /// Returns `false` when no task has `id`.
    fn delete_task(&self, id: &str) -> StoreResult<bool>;
    /// Returns `None` when no task has `task_id`.
    fn add_comment(&self, task_id: &str, content: &str) -> StoreResult<Option<Comment>>;
}

/// JSON-store-backed task repository.
#[derive(Debug, Clone, Copy)]
pub struct JsonTaskRepository<'store> {
    store: &'store JsonStore,
}

impl<'store> JsonTaskRepository<'store> {
    pub fn new(store: &'store JsonStore) -> Self {
        Self { store }
    }
}

impl TaskRepository for JsonTaskRepository<'_> {
    fn list_tasks(&self) -> StoreResult<Vec<Task>> {
        list_records(self.store)
    }

    fn get_task(&self, id: &str) -> StoreResult<Option<Task>> {
        find_record(self.store, id)
    }

    fn create_task(&self, input: NewTask) -> StoreResult<Task> {
        let task = Task::from_new(input, new_id(), now_timestamp());
        let task = insert_record(self.store, task, &AnalyticsDelta::task_created())?;
        debug!("event=task_create module=repo status=ok task_id={}", task.id);
        Ok(task)
    }

    fn update_task(&self, id: &str, patch: TaskPatch) -> StoreResult<Option<Task>> {
        let guard = self.store.lock(Collection::Tasks)?;
        let mut tasks: Vec<Task> = guard.load()?;
        let Some(task) = tasks.iter_mut().find(|task| task.id == id) else {
            debug!("event=task_update module=repo status=not_found task_id={id}");
            return Ok(None);
        };

        let delta = transition_delta(task, &patch);
        task.apply_patch(patch, now_timestamp());
        let updated = task.clone();
        guard.save(&tasks)?;

        if !delta.is_empty() {
            JsonAnalyticsRepository::new(self.store).apply_delta(&delta)?;
        }
        debug!(
            "event=task_update module=repo status=ok task_id={id} completed_edge={} archived_edge={}",
            delta.tasks_completed, delta.tasks_archived
        );
        Ok(Some(updated))
    }

    fn delete_task(&self, id: &str) -> StoreResult<bool> {
        let removed = remove_record::<Task>(self.store, id)?;
        debug!("event=task_delete module=repo status=ok task_id={id} removed={removed}");
        Ok(removed)
    }

    fn add_comment(&self, task_id: &str, content: &str) -> StoreResult<Option<Comment>> {
        let guard = self.store.lock(Collection::Tasks)?;
        let mut tasks: Vec<Task> = guard.load()?;
        let Some(task) = tasks.iter_mut().find(|task| task.id == task_id) else {
            return Ok(None);
        };

        let comment = Comment {
            id: new_id(),
            content: content.to_string(),
            task_id: task_id.to_string(),
            created_at: now_timestamp(),
        };
        task.comments.push(comment.clone());
        guard.save(&tasks)?;
        Ok(Some(comment))
    }
}

/// Counter increments implied by applying `patch` to `prior`.
fn transition_delta(prior: &Task, patch: &TaskPatch) -> AnalyticsDelta {
    AnalyticsDelta {
        tasks_completed: u64::from(patch.completed == Some(true) && !prior.completed),
        tasks_archived: u64::from(patch.archived == Some(true) && !prior.archived),
        ..AnalyticsDelta::default()
    }
}
