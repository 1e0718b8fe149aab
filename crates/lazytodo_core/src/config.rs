//! Workspace configuration.
//!
//! The core reads no environment variables; hosts build a
//! `WorkspaceConfig` explicitly and pass it to `Workspace::open`.

use std::path::{Path, PathBuf};

/// Directory name used when the host supplies no data directory.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Storage settings for one workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceConfig {
    /// Root directory holding the four collection files.
    pub data_dir: PathBuf,
    /// Indent JSON documents on save. Off by default to match compact files
    /// written by earlier versions.
    pub pretty_json: bool,
}

impl WorkspaceConfig {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            pretty_json: false,
        }
    }

    pub fn with_pretty_json(mut self, pretty_json: bool) -> Self {
        self.pretty_json = pretty_json;
        self
    }
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}
