//! Project repository contracts and JSON-store implementation.
//!
//! # Invariants
//! - Deleting a project does not touch tasks that reference it; those keep
//!   a dangling `project_id`.
//! - Updates have no analytics side effect.

use super::{find_record, insert_record, list_records, remove_record, update_record};
use crate::model::analytics::AnalyticsDelta;
use crate::model::ids::{new_id, now_timestamp};
use crate::model::project::{NewProject, Project, ProjectPatch};
use crate::store::{JsonStore, StoreResult};
use log::debug;

/// Repository interface for project operations.
pub trait ProjectRepository {
    fn list_projects(&self) -> StoreResult<Vec<Project>>;
    fn get_project(&self, id: &str) -> StoreResult<Option<Project>>;
    /// Like `TaskRepository::create_task`, an analytics failure is reported
    /// after the project was already written.
    fn create_project(&self, input: NewProject) -> StoreResult<Project>;
    fn update_project(&self, id: &str, patch: ProjectPatch) -> StoreResult<Option<Project>>;
    fn delete_project(&self, id: &str) -> StoreResult<bool>;
}

/// JSON-store-backed project repository.
#[derive(Debug, Clone, Copy)]
pub struct JsonProjectRepository<'store> {
    store: &'store JsonStore,
}

impl<'store> JsonProjectRepository<'store> {
    pub fn new(store: &'store JsonStore) -> Self {
        Self { store }
    }
}

impl ProjectRepository for JsonProjectRepository<'_> {
    fn list_projects(&self) -> StoreResult<Vec<Project>> {
        list_records(self.store)
    }

    fn get_project(&self, id: &str) -> StoreResult<Option<Project>> {
        find_record(self.store, id)
    }

    fn create_project(&self, input: NewProject) -> StoreResult<Project> {
        let project = Project::from_new(input, new_id(), now_timestamp());
        let project = insert_record(self.store, project, &AnalyticsDelta::project_created())?;
        debug!(
            "event=project_create module=repo status=ok project_id={}",
            project.id
        );
        Ok(project)
    }

    fn update_project(&self, id: &str, patch: ProjectPatch) -> StoreResult<Option<Project>> {
        let now = now_timestamp();
        update_record(self.store, id, |project: &mut Project| {
            project.apply_patch(patch, now)
        })
    }

    fn delete_project(&self, id: &str) -> StoreResult<bool> {
        let removed = remove_record::<Project>(self.store, id)?;
        debug!("event=project_delete module=repo status=ok project_id={id} removed={removed}");
        Ok(removed)
    }
}
