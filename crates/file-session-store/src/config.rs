//! Configuration for the session store.

use std::path::{Path, PathBuf};

/// Default directory for session files, relative to the working directory.
pub const DEFAULT_SESSION_DIR: &str = "./sessions";

/// Configuration for the session store.
///
/// The directory is fixed at construction and must exist before the first
/// write; the store never creates it.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the session files.
    pub directory: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_SESSION_DIR),
        }
    }
}

impl StoreConfig {
    /// Create a new configuration with the default session directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the session directory.
    pub fn with_directory(mut self, directory: impl AsRef<Path>) -> Self {
        self.directory = directory.as_ref().to_path_buf();
        self
    }
}
