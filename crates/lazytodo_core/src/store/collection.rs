//! Named collections managed by the JSON store.

use std::fmt::{Display, Formatter};

/// One of the four independently persisted documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Tasks,
    Projects,
    Notes,
    /// Singleton document, not an array.
    Analytics,
}

impl Collection {
    /// Every collection, in initialization order.
    pub const ALL: [Collection; 4] = [
        Collection::Tasks,
        Collection::Projects,
        Collection::Notes,
        Collection::Analytics,
    ];

    /// Stable label used in file names and log records.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::Projects => "projects",
            Self::Notes => "notes",
            Self::Analytics => "analytics",
        }
    }

    /// File name under the store root.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Tasks => "tasks.json",
            Self::Projects => "projects.json",
            Self::Notes => "notes.json",
            Self::Analytics => "analytics.json",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Tasks => 0,
            Self::Projects => 1,
            Self::Notes => 2,
            Self::Analytics => 3,
        }
    }
}

impl Display for Collection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
