//! Task and comment domain model.
//!
//! # Responsibility
//! - Define the persisted task record and its embedded comments.
//! - Define create/patch inputs and the merge rule applied by updates.
//!
//! # Invariants
//! - `id` and `created_at` never change after creation.
//! - Comments are owned by exactly one task and are append-only.
//! - `project_id` is a weak reference; the referenced project may be gone.

use super::ids::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

/// Persisted task record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: EntityId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub completed: bool,
    pub archived: bool,
    /// Weak reference to a project id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<EntityId>,
    /// Reserved parent link; no logic reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_task_id: Option<EntityId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Comment embedded in a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: EntityId,
    pub content: String,
    /// Back-reference to the owning task.
    pub task_id: EntityId,
    pub created_at: Timestamp,
}

/// Caller-supplied fields for a new task.
///
/// Identity, timestamps and comments are assigned by the repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub archived: bool,
    pub project_id: Option<EntityId>,
    pub parent_task_id: Option<EntityId>,
}

impl NewTask {
    /// Shortcut for the common "title only" quick-create path.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Partial task update.
///
/// `None` leaves a field untouched. For nullable fields, `Some(None)`
/// clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub completed: Option<bool>,
    pub archived: Option<bool>,
    pub project_id: Option<Option<EntityId>>,
    pub parent_task_id: Option<Option<EntityId>>,
}

impl TaskPatch {
    pub fn completed(value: bool) -> Self {
        Self {
            completed: Some(value),
            ..Self::default()
        }
    }

    pub fn archived(value: bool) -> Self {
        Self {
            archived: Some(value),
            ..Self::default()
        }
    }
}

impl Task {
    /// Builds a task from create input with a fixed identity and instant.
    pub fn from_new(input: NewTask, id: EntityId, now: Timestamp) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            completed: input.completed,
            archived: input.archived,
            project_id: input.project_id,
            parent_task_id: input.parent_task_id,
            created_at: now.clone(),
            updated_at: now,
            comments: Vec::new(),
        }
    }

    /// Merges provided patch fields over this record and refreshes
    /// `updated_at`.
    ///
    /// Timestamps have millisecond precision, so two updates within the same
    /// millisecond leave `updated_at` equal rather than strictly greater.
    pub fn apply_patch(&mut self, patch: TaskPatch, now: Timestamp) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(archived) = patch.archived {
            self.archived = archived;
        }
        if let Some(project_id) = patch.project_id {
            self.project_id = project_id;
        }
        if let Some(parent_task_id) = patch.parent_task_id {
            self.parent_task_id = parent_task_id;
        }
        self.updated_at = now;
    }
}
