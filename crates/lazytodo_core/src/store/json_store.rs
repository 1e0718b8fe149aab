//! JSON document store bootstrap and whole-collection I/O.
//!
//! # Responsibility
//! - Seed the data directory lazily on first access.
//! - Provide per-collection guards that wrap one load-mutate-save cycle.
//!
//! # Invariants
//! - Lock order across collections is entity collection first, then
//!   analytics. No code path acquires them the other way around.
//! - Guards never outlive the store that issued them.

use super::{Collection, StoreError, StoreResult};
use crate::model::analytics::Analytics;
use crate::model::ids::now_timestamp;
use log::{debug, error, info};
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

const TMP_SUFFIX: &str = ".tmp";

/// Whole-collection JSON store rooted at one directory.
///
/// The store is `Send + Sync`; share it by reference or `Arc`.
#[derive(Debug)]
pub struct JsonStore {
    root: PathBuf,
    pretty: bool,
    initialized: OnceCell<()>,
    locks: [Mutex<()>; 4],
}

/// Exclusive access to one collection for the lifetime of the guard.
pub struct CollectionGuard<'store> {
    store: &'store JsonStore,
    collection: Collection,
    _lock: MutexGuard<'store, ()>,
}

/// Opens a store rooted at `root` and seeds any missing collection files.
///
/// # Side effects
/// - Creates `root` and missing collection files.
/// - Emits `store_init` logging events with duration and status.
pub fn open_store(root: impl AsRef<Path>, pretty: bool) -> StoreResult<JsonStore> {
    let store = JsonStore::new(root, pretty);
    store.ensure_initialized()?;
    Ok(store)
}

impl JsonStore {
    /// Creates a store handle without touching the file system.
    ///
    /// The directory layout is created on first access.
    pub fn new(root: impl AsRef<Path>, pretty: bool) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            pretty,
            initialized: OnceCell::new(),
            locks: Default::default(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a collection document.
    pub fn path_of(&self, collection: Collection) -> PathBuf {
        self.root.join(collection.file_name())
    }

    /// Runs first-time setup once per handle. Later calls are no-ops.
    pub fn ensure_initialized(&self) -> StoreResult<()> {
        self.initialized
            .get_or_try_init(|| self.seed_layout())
            .map(|_| ())
    }

    /// Acquires the collection lock, initializing the store if needed.
    pub fn lock(&self, collection: Collection) -> StoreResult<CollectionGuard<'_>> {
        self.ensure_initialized()?;
        // The mutex guards no in-memory data, so a poisoned lock is still usable.
        let lock = self.locks[collection.index()]
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(CollectionGuard {
            store: self,
            collection,
            _lock: lock,
        })
    }

    /// Reads a whole collection under its lock.
    pub fn load<T: DeserializeOwned>(&self, collection: Collection) -> StoreResult<T> {
        self.lock(collection)?.load()
    }

    /// Overwrites a whole collection under its lock.
    pub fn save<T: Serialize>(&self, collection: Collection, value: &T) -> StoreResult<()> {
        self.lock(collection)?.save(value)
    }

    fn seed_layout(&self) -> StoreResult<()> {
        let started_at = Instant::now();
        info!("event=store_init module=store status=start");

        let result = self.seed_missing_files();
        match &result {
            Ok(created) => info!(
                "event=store_init module=store status=ok duration_ms={} created_files={}",
                started_at.elapsed().as_millis(),
                created
            ),
            Err(err) => error!(
                "event=store_init module=store status=error duration_ms={} error_code={} error={}",
                started_at.elapsed().as_millis(),
                err.code(),
                err
            ),
        }
        result.map(|_| ())
    }

    fn seed_missing_files(&self) -> StoreResult<usize> {
        fs::create_dir_all(&self.root).map_err(|err| StoreError::io(&self.root, err))?;

        let mut created = 0;
        for collection in Collection::ALL {
            let path = self.path_of(collection);
            if path.exists() {
                continue;
            }
            match collection {
                Collection::Analytics => {
                    self.write_document(&path, &Analytics::zeroed(now_timestamp()))?
                }
                _ => self.write_document(&path, &serde_json::Value::Array(Vec::new()))?,
            }
            created += 1;
        }
        Ok(created)
    }

    fn read_document<T: DeserializeOwned>(&self, path: &Path) -> StoreResult<T> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotInitialized {
                    path: path.to_path_buf(),
                });
            }
            Err(err) => return Err(StoreError::io(path, err)),
        };
        serde_json::from_str(&text).map_err(|err| StoreError::serde(path, err))
    }

    fn write_document<T: Serialize>(&self, path: &Path, value: &T) -> StoreResult<()> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(value)
        } else {
            serde_json::to_vec(value)
        }
        .map_err(|err| StoreError::serde(path, err))?;

        let mut tmp_name = path.as_os_str().to_os_string();
        tmp_name.push(TMP_SUFFIX);
        let tmp_path = PathBuf::from(tmp_name);

        let mut file = File::create(&tmp_path).map_err(|err| StoreError::io(&tmp_path, err))?;
        file.write_all(&bytes)
            .and_then(|()| file.sync_all())
            .map_err(|err| StoreError::io(&tmp_path, err))?;
        drop(file);

        fs::rename(&tmp_path, path).map_err(|err| StoreError::io(path, err))
    }
}

impl CollectionGuard<'_> {
    pub fn collection(&self) -> Collection {
        self.collection
    }

    /// Reads the guarded collection document.
    pub fn load<T: DeserializeOwned>(&self) -> StoreResult<T> {
        let path = self.store.path_of(self.collection);
        let result = self.store.read_document(&path);
        if let Err(err) = &result {
            error!(
                "event=collection_load module=store status=error collection={} error_code={} error={}",
                self.collection,
                err.code(),
                err
            );
        }
        result
    }

    /// Replaces the guarded collection document.
    pub fn save<T: Serialize>(&self, value: &T) -> StoreResult<()> {
        let started_at = Instant::now();
        let path = self.store.path_of(self.collection);
        match self.store.write_document(&path, value) {
            Ok(()) => {
                debug!(
                    "event=collection_save module=store status=ok collection={} duration_ms={}",
                    self.collection,
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=collection_save module=store status=error collection={} duration_ms={} error_code={} error={}",
                    self.collection,
                    started_at.elapsed().as_millis(),
                    err.code(),
                    err
                );
                Err(err)
            }
        }
    }
}
