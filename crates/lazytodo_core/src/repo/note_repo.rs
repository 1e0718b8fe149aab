//! Note repository contracts and JSON-store implementation.
//!
//! # Invariants
//! - Tags are stored exactly as given; no normalization happens here.
//! - Only creation reaches analytics (`notes_created`).

use super::{find_record, insert_record, list_records, remove_record, update_record};
use crate::model::analytics::AnalyticsDelta;
use crate::model::ids::{new_id, now_timestamp};
use crate::model::note::{NewNote, Note, NotePatch};
use crate::store::{JsonStore, StoreResult};
use log::debug;

/// Repository interface for note operations.
pub trait NoteRepository {
    fn list_notes(&self) -> StoreResult<Vec<Note>>;
    fn get_note(&self, id: &str) -> StoreResult<Option<Note>>;
    /// Like `TaskRepository::create_task`, an analytics failure is reported
    /// after the note was already written.
    fn create_note(&self, input: NewNote) -> StoreResult<Note>;
    fn update_note(&self, id: &str, patch: NotePatch) -> StoreResult<Option<Note>>;
    fn delete_note(&self, id: &str) -> StoreResult<bool>;
}

/// JSON-store-backed note repository.
#[derive(Debug, Clone, Copy)]
pub struct JsonNoteRepository<'store> {
    store: &'store JsonStore,
}

impl<'store> JsonNoteRepository<'store> {
    pub fn new(store: &'store JsonStore) -> Self {
        Self { store }
    }
}

impl NoteRepository for JsonNoteRepository<'_> {
    fn list_notes(&self) -> StoreResult<Vec<Note>> {
        list_records(self.store)
    }

    fn get_note(&self, id: &str) -> StoreResult<Option<Note>> {
        find_record(self.store, id)
    }

    fn create_note(&self, input: NewNote) -> StoreResult<Note> {
        let note = Note::from_new(input, new_id(), now_timestamp());
        let note = insert_record(self.store, note, &AnalyticsDelta::note_created())?;
        debug!("event=note_create module=repo status=ok note_id={}", note.id);
        Ok(note)
    }

    fn update_note(&self, id: &str, patch: NotePatch) -> StoreResult<Option<Note>> {
        let now = now_timestamp();
        update_record(self.store, id, |note: &mut Note| note.apply_patch(patch, now))
    }

    fn delete_note(&self, id: &str) -> StoreResult<bool> {
        remove_record::<Note>(self.store, id)
    }
}
