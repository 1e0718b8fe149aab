//! Repository contracts and JSON-store implementations.
//!
//! # Responsibility
//! - Define typed CRUD contracts per collection.
//! - Run every mutation as one locked load-mutate-save cycle.
//! - Feed counter deltas to the analytics aggregator.
//!
//! # Invariants
//! - Unknown ids are reported as `None`/`false`, never as errors, and never
//!   cause a write.
//! - Analytics deltas are applied after the entity save, while the entity
//!   collection lock is still held.

pub mod analytics_repo;
pub mod note_repo;
pub mod project_repo;
pub mod task_repo;

use crate::model::analytics::AnalyticsDelta;
use crate::model::note::Note;
use crate::model::project::Project;
use crate::model::task::Task;
use crate::store::{Collection, JsonStore, StoreResult};
use analytics_repo::{AnalyticsRepository, JsonAnalyticsRepository};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Record addressable by its opaque id.
pub(crate) trait Record: Clone + Serialize + DeserializeOwned {
    const COLLECTION: Collection;

    fn id(&self) -> &str;
}

impl Record for Task {
    const COLLECTION: Collection = Collection::Tasks;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Project {
    const COLLECTION: Collection = Collection::Projects;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Note {
    const COLLECTION: Collection = Collection::Notes;

    fn id(&self) -> &str {
        &self.id
    }
}

pub(crate) fn list_records<T: Record>(store: &JsonStore) -> StoreResult<Vec<T>> {
    store.load(T::COLLECTION)
}

pub(crate) fn find_record<T: Record>(store: &JsonStore, id: &str) -> StoreResult<Option<T>> {
    let records: Vec<T> = store.load(T::COLLECTION)?;
    Ok(records.into_iter().find(|record| record.id() == id))
}

/// Appends a new record, persists the collection and then applies `delta`
/// to the analytics singleton before releasing the collection lock.
///
/// A failed analytics save is returned even though `record` is already
/// persisted.
pub(crate) fn insert_record<T: Record>(
    store: &JsonStore,
    record: T,
    delta: &AnalyticsDelta,
) -> StoreResult<T> {
    let guard = store.lock(T::COLLECTION)?;
    let mut records: Vec<T> = guard.load()?;
    records.push(record.clone());
    guard.save(&records)?;
    JsonAnalyticsRepository::new(store).apply_delta(delta)?;
    Ok(record)
}

/// Removes one record by id. Returns `false` without writing when absent.
pub(crate) fn remove_record<T: Record>(store: &JsonStore, id: &str) -> StoreResult<bool> {
    let guard = store.lock(T::COLLECTION)?;
    let mut records: Vec<T> = guard.load()?;
    let before = records.len();
    records.retain(|record| record.id() != id);
    if records.len() == before {
        return Ok(false);
    }
    guard.save(&records)?;
    Ok(true)
}

/// Applies `mutate` to the record with `id` and persists the collection.
///
/// Returns the updated record, or `None` without writing when absent.
pub(crate) fn update_record<T, F>(store: &JsonStore, id: &str, mutate: F) -> StoreResult<Option<T>>
where
    T: Record,
    F: FnOnce(&mut T),
{
    let guard = store.lock(T::COLLECTION)?;
    let mut records: Vec<T> = guard.load()?;
    let Some(record) = records.iter_mut().find(|record| record.id() == id) else {
        return Ok(None);
    };
    mutate(record);
    let updated = record.clone();
    guard.save(&records)?;
    Ok(Some(updated))
}
