//! Flat-file JSON storage for whole collections.
//!
//! # Responsibility
//! - Lay out the data directory and seed missing collection files.
//! - Read and overwrite one collection document at a time.
//! - Serialize load-mutate-save cycles per collection in-process.
//!
//! # Invariants
//! - Initialization only creates missing files; existing data is never
//!   overwritten.
//! - Saves go through a sibling temp file and a rename, so readers see the
//!   old document or the new one, never a partial write.
//! - A missing collection file after initialization is reported as
//!   `NotInitialized`, never silently recreated.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod collection;
mod json_store;

pub use collection::Collection;
pub use json_store::{open_store, CollectionGuard, JsonStore};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    /// File system failure while reading, writing or renaming.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Document exists but is not valid JSON for the expected shape.
    Serde {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Collection file is missing although initialization ran.
    NotInitialized { path: PathBuf },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn serde(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Serde {
            path: path.into(),
            source,
        }
    }

    /// Short machine-readable label for log records.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "store_io_failed",
            Self::Serde { .. } => "store_decode_failed",
            Self::NotInitialized { .. } => "store_not_initialized",
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "i/o error at `{}`: {source}", path.display()),
            Self::Serde { path, source } => {
                write!(f, "invalid JSON document `{}`: {source}", path.display())
            }
            Self::NotInitialized { path } => {
                write!(f, "collection file `{}` does not exist", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Serde { source, .. } => Some(source),
            Self::NotInitialized { .. } => None,
        }
    }
}
