//! Note domain model.

use super::ids::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

/// Persisted note record.
///
/// `tags` distinguishes "no tag list" (`None`) from an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Caller-supplied fields for a new note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub tags: Option<Vec<String>>,
}

/// Partial note update. `Some(None)` drops the tag list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Option<Vec<String>>>,
}

impl Note {
    pub fn from_new(input: NewNote, id: EntityId, now: Timestamp) -> Self {
        Self {
            id,
            title: input.title,
            content: input.content,
            created_at: now.clone(),
            updated_at: now,
            tags: input.tags,
        }
    }

    pub fn apply_patch(&mut self, patch: NotePatch, now: Timestamp) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        self.updated_at = now;
    }

    /// Case-insensitive exact tag match.
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.trim().to_lowercase();
        self.tags
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(|value| value.trim().to_lowercase() == wanted)
    }
}
