//! Workspace facade over the JSON store and repositories.
//!
//! # Responsibility
//! - Own the single store handle for one data directory.
//! - Expose the inbound calls pages and tools use, plus repository and
//!   service handles for finer-grained access.
//!
//! # Invariants
//! - One `Workspace` per data directory per process; repositories borrow
//!   its store and share its per-collection locks.
//! - Callers never observe an uninitialized store: `open` seeds eagerly
//!   and `open_lazy` seeds on first access.

use crate::config::WorkspaceConfig;
use crate::model::analytics::Analytics;
use crate::model::note::{NewNote, Note, NotePatch};
use crate::model::project::{NewProject, Project, ProjectPatch};
use crate::model::task::{Comment, NewTask, Task, TaskPatch};
use crate::repo::analytics_repo::{AnalyticsRepository, JsonAnalyticsRepository};
use crate::repo::note_repo::{JsonNoteRepository, NoteRepository};
use crate::repo::project_repo::{JsonProjectRepository, ProjectRepository};
use crate::repo::task_repo::{JsonTaskRepository, TaskRepository};
use crate::service::dashboard::{build_dashboard, Dashboard};
use crate::service::note_service::{NoteListItem, NoteService};
use crate::service::project_service::{ProjectDetail, ProjectService};
use crate::service::task_service::TaskService;
use crate::store::{open_store, JsonStore, StoreResult};
use log::{error, info};
use std::time::Instant;

/// Shared handle to one task/project/note data directory.
#[derive(Debug)]
pub struct Workspace {
    config: WorkspaceConfig,
    store: JsonStore,
}

impl Workspace {
    /// Opens the workspace and seeds missing collection files immediately.
    pub fn open(config: WorkspaceConfig) -> StoreResult<Self> {
        let started_at = Instant::now();
        info!(
            "event=workspace_open module=workspace status=start pretty_json={}",
            config.pretty_json
        );
        match open_store(&config.data_dir, config.pretty_json) {
            Ok(store) => {
                info!(
                    "event=workspace_open module=workspace status=ok duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(Self { config, store })
            }
            Err(err) => {
                error!(
                    "event=workspace_open module=workspace status=error duration_ms={} error_code={} error={}",
                    started_at.elapsed().as_millis(),
                    err.code(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Builds the workspace without touching disk; the first call seeds it.
    pub fn open_lazy(config: WorkspaceConfig) -> Self {
        let store = JsonStore::new(&config.data_dir, config.pretty_json);
        Self { config, store }
    }

    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    pub fn tasks(&self) -> JsonTaskRepository<'_> {
        JsonTaskRepository::new(&self.store)
    }

    pub fn projects(&self) -> JsonProjectRepository<'_> {
        JsonProjectRepository::new(&self.store)
    }

    pub fn notes(&self) -> JsonNoteRepository<'_> {
        JsonNoteRepository::new(&self.store)
    }

    pub fn analytics(&self) -> JsonAnalyticsRepository<'_> {
        JsonAnalyticsRepository::new(&self.store)
    }

    pub fn task_service(&self) -> TaskService<JsonTaskRepository<'_>> {
        TaskService::new(self.tasks())
    }

    pub fn project_service(
        &self,
    ) -> ProjectService<JsonProjectRepository<'_>, JsonTaskRepository<'_>> {
        ProjectService::new(self.projects(), self.tasks())
    }

    pub fn note_service(&self) -> NoteService<JsonNoteRepository<'_>> {
        NoteService::new(self.notes())
    }

    // Tasks

    pub fn list_tasks(&self) -> StoreResult<Vec<Task>> {
        self.tasks().list_tasks()
    }

    pub fn get_task(&self, id: &str) -> StoreResult<Option<Task>> {
        self.tasks().get_task(id)
    }

    pub fn create_task(&self, input: NewTask) -> StoreResult<Task> {
        self.tasks().create_task(input)
    }

    pub fn update_task(&self, id: &str, patch: TaskPatch) -> StoreResult<Option<Task>> {
        self.tasks().update_task(id, patch)
    }

    pub fn delete_task(&self, id: &str) -> StoreResult<bool> {
        self.tasks().delete_task(id)
    }

    pub fn add_comment(&self, task_id: &str, content: &str) -> StoreResult<Option<Comment>> {
        self.tasks().add_comment(task_id, content)
    }

    pub fn toggle_task_completed(&self, id: &str) -> StoreResult<Option<Task>> {
        self.task_service().toggle_completed(id)
    }

    pub fn archive_task(&self, id: &str) -> StoreResult<Option<Task>> {
        self.task_service().archive(id)
    }

    pub fn list_active_tasks(&self) -> StoreResult<Vec<Task>> {
        self.task_service().list_active()
    }

    pub fn list_archived_tasks(&self) -> StoreResult<Vec<Task>> {
        self.task_service().list_archived()
    }

    // Projects

    pub fn list_projects(&self) -> StoreResult<Vec<Project>> {
        self.projects().list_projects()
    }

    pub fn get_project(&self, id: &str) -> StoreResult<Option<Project>> {
        self.projects().get_project(id)
    }

    pub fn create_project(&self, input: NewProject) -> StoreResult<Project> {
        self.projects().create_project(input)
    }

    pub fn update_project(&self, id: &str, patch: ProjectPatch) -> StoreResult<Option<Project>> {
        self.projects().update_project(id, patch)
    }

    pub fn delete_project(&self, id: &str) -> StoreResult<bool> {
        self.projects().delete_project(id)
    }

    pub fn project_detail(&self, id: &str) -> StoreResult<Option<ProjectDetail>> {
        self.project_service().project_detail(id)
    }

    // Notes

    pub fn list_notes(&self) -> StoreResult<Vec<Note>> {
        self.notes().list_notes()
    }

    pub fn get_note(&self, id: &str) -> StoreResult<Option<Note>> {
        self.notes().get_note(id)
    }

    pub fn create_note(&self, input: NewNote) -> StoreResult<Note> {
        self.notes().create_note(input)
    }

    pub fn update_note(&self, id: &str, patch: NotePatch) -> StoreResult<Option<Note>> {
        self.notes().update_note(id, patch)
    }

    pub fn delete_note(&self, id: &str) -> StoreResult<bool> {
        self.notes().delete_note(id)
    }

    pub fn list_note_items(&self) -> StoreResult<Vec<NoteListItem>> {
        self.note_service().list_note_items()
    }

    // Analytics and overview

    pub fn get_analytics(&self) -> StoreResult<Analytics> {
        self.analytics().get_analytics()
    }

    pub fn dashboard(&self) -> StoreResult<Dashboard> {
        build_dashboard(
            &self.tasks(),
            &self.projects(),
            &self.notes(),
            &self.analytics(),
        )
    }
}
