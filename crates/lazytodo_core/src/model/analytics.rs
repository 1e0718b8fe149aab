//! Analytics singleton and counter deltas.
//!
//! # Invariants
//! - Counters only grow; they record transitions, not current state.
//! - `task_completion_rate == tasks_completed / tasks_created` when
//!   `tasks_created > 0`, else `0.0`.

use super::ids::Timestamp;
use serde::{Deserialize, Serialize};

/// Persisted analytics singleton.
///
/// Every field defaults when missing from the stored document, so a
/// hand-edited or older singleton still loads and keeps counting from zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    #[serde(default)]
    pub task_completion_rate: f64,
    #[serde(default)]
    pub tasks_completed: u64,
    #[serde(default)]
    pub tasks_created: u64,
    #[serde(default)]
    pub tasks_archived: u64,
    #[serde(default)]
    pub projects_created: u64,
    #[serde(default)]
    pub notes_created: u64,
    #[serde(default)]
    pub last_updated: Timestamp,
}

/// Additive counter increments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyticsDelta {
    pub tasks_created: u64,
    pub tasks_completed: u64,
    pub tasks_archived: u64,
    pub projects_created: u64,
    pub notes_created: u64,
}

impl AnalyticsDelta {
    pub fn task_created() -> Self {
        Self {
            tasks_created: 1,
            ..Self::default()
        }
    }

    pub fn project_created() -> Self {
        Self {
            projects_created: 1,
            ..Self::default()
        }
    }

    pub fn note_created() -> Self {
        Self {
            notes_created: 1,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Analytics {
    /// Zero-valued singleton written on first initialization.
    pub fn zeroed(now: Timestamp) -> Self {
        Self {
            task_completion_rate: 0.0,
            tasks_completed: 0,
            tasks_created: 0,
            tasks_archived: 0,
            projects_created: 0,
            notes_created: 0,
            last_updated: now,
        }
    }

    /// Adds every increment in `delta`, recomputes the completion rate and
    /// stamps `last_updated`.
    pub fn apply(&mut self, delta: &AnalyticsDelta, now: Timestamp) {
        self.tasks_created = self.tasks_created.saturating_add(delta.tasks_created);
        self.tasks_completed = self.tasks_completed.saturating_add(delta.tasks_completed);
        self.tasks_archived = self.tasks_archived.saturating_add(delta.tasks_archived);
        self.projects_created = self.projects_created.saturating_add(delta.projects_created);
        self.notes_created = self.notes_created.saturating_add(delta.notes_created);
        self.task_completion_rate = completion_rate(self.tasks_completed, self.tasks_created);
        self.last_updated = now;
    }
}

/// Ratio of completed to created tasks; `0.0` when nothing was created.
pub fn completion_rate(completed: u64, created: u64) -> f64 {
    if created == 0 {
        0.0
    } else {
        completed as f64 / created as f64
    }
}
