//! Project domain model.
//!
//! # Responsibility
//! - Define the persisted project record and its mind-map nodes.
//!
//! # Invariants
//! - `tasks` is a legacy embedded list. It is empty at creation and never
//!   repopulated; project membership is derived from `Task::project_id`.
//! - `mind_map` encodes a tree by child ids and is stored verbatim.

use super::ids::{EntityId, Timestamp};
use super::task::Task;
use serde::{Deserialize, Serialize};

/// Persisted project record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntityId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mind_map: Option<Vec<MindMapNode>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Not authoritative. See module docs.
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// One node of a project mind map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MindMapNode {
    pub id: EntityId,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<EntityId>>,
}

/// Caller-supplied fields for a new project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: Option<String>,
    pub mind_map: Option<Vec<MindMapNode>>,
}

impl NewProject {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Partial project update. `Some(None)` clears a nullable field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub mind_map: Option<Option<Vec<MindMapNode>>>,
}

impl Project {
    pub fn from_new(input: NewProject, id: EntityId, now: Timestamp) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            mind_map: input.mind_map,
            created_at: now.clone(),
            updated_at: now,
            tasks: Vec::new(),
        }
    }

    pub fn apply_patch(&mut self, patch: ProjectPatch, now: Timestamp) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(mind_map) = patch.mind_map {
            self.mind_map = mind_map;
        }
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::{MindMapNode, NewProject, Project};

    #[test]
    fn mind_map_round_trips_with_and_without_children() {
        let mut input = NewProject::titled("Garden");
        input.mind_map = Some(vec![
            MindMapNode {
                id: "root".to_string(),
                content: "Garden".to_string(),
                children: Some(vec!["leaf".to_string()]),
            },
            MindMapNode {
                id: "leaf".to_string(),
                content: "Tomatoes".to_string(),
                children: None,
            },
        ]);
        let project = Project::from_new(
            input,
            "p-1".to_string(),
            "2024-01-01T00:00:00.000Z".to_string(),
        );

        let text = serde_json::to_string(&project).unwrap();
        assert!(text.contains("\"mindMap\""));
        assert!(!text.contains("\"children\":null"));

        let parsed: Project = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, project);
        assert!(parsed.tasks.is_empty());
    }
}
