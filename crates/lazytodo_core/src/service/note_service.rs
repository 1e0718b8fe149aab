//! Note use-case service.
//!
//! # Responsibility
//! - Provide the compact note list used by navigation.
//! - Provide tag filtering.
//!
//! # Invariants
//! - Note lists are ordered by `updated_at` descending.
//! - Tag matching is case-insensitive and exact; stored tags are untouched.

use crate::model::ids::{EntityId, Timestamp};
use crate::model::note::Note;
use crate::repo::note_repo::NoteRepository;
use crate::service::sort_newest_first;
use crate::store::StoreResult;

/// Compact list entry for note navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteListItem {
    pub id: EntityId,
    pub title: String,
    pub updated_at: Timestamp,
}

pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Id/title pairs, most recently updated first.
    pub fn list_note_items(&self) -> StoreResult<Vec<NoteListItem>> {
        let mut notes = self.repo.list_notes()?;
        sort_newest_first(&mut notes, |note| note.updated_at.as_str());
        Ok(notes
            .into_iter()
            .map(|note| NoteListItem {
                id: note.id,
                title: note.title,
                updated_at: note.updated_at,
            })
            .collect())
    }

    /// Notes carrying `tag`, most recently updated first.
    pub fn list_by_tag(&self, tag: &str) -> StoreResult<Vec<Note>> {
        let mut notes = self.repo.list_notes()?;
        notes.retain(|note| note.has_tag(tag));
        sort_newest_first(&mut notes, |note| note.updated_at.as_str());
        Ok(notes)
    }
}
