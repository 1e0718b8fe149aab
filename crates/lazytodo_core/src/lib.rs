//! Core persistence for LazyTodo tasks, projects, notes and analytics.
//! This crate is the single source of truth for storage invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;
pub mod workspace;

pub use config::{WorkspaceConfig, DEFAULT_DATA_DIR};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError, LoggingStatus};
pub use model::analytics::{Analytics, AnalyticsDelta};
pub use model::ids::{new_id, now_timestamp, EntityId, Timestamp};
pub use model::note::{NewNote, Note, NotePatch};
pub use model::project::{MindMapNode, NewProject, Project, ProjectPatch};
pub use model::task::{Comment, NewTask, Task, TaskPatch};
pub use repo::analytics_repo::{AnalyticsRepository, JsonAnalyticsRepository};
pub use repo::note_repo::{JsonNoteRepository, NoteRepository};
pub use repo::project_repo::{JsonProjectRepository, ProjectRepository};
pub use repo::task_repo::{JsonTaskRepository, TaskRepository};
pub use service::dashboard::Dashboard;
pub use service::note_service::{NoteListItem, NoteService};
pub use service::project_service::{ProjectDetail, ProjectService};
pub use service::task_service::TaskService;
pub use store::{open_store, Collection, JsonStore, StoreError, StoreResult};
pub use workspace::Workspace;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
