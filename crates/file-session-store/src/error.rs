//! Error types for session store operations.

use std::path::PathBuf;

/// Error type for session store operations.
///
/// A missing session is never an error: `get` returns `Ok(None)` and
/// `destroy` succeeds as a no-op. Filesystem variants carry the path that
/// failed alongside the underlying cause.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A filename matched a session's glob pattern but its TTL segment is
    /// missing or not a non-negative integer.
    #[error("Invalid TTL in session filename: {0}")]
    InvalidTtl(String),

    /// The payload could not be serialized to JSON.
    #[error("Failed to serialize session payload: {0}")]
    Serialize(#[source] serde_json::Error),

    /// On-disk content is not valid JSON.
    #[error("Invalid JSON in session file {path}: {source}")]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The lister was given a malformed glob pattern.
    #[error("Invalid glob pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// Listing the session directory failed.
    #[error("Failed to list session directory {path}: {source}")]
    List {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading a session file's metadata failed.
    #[error("Failed to stat session file {path}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading a session file failed (including a file that vanished
    /// between listing and reading).
    #[error("Failed to read session file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a session file failed.
    #[error("Failed to write session file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Deleting a session file failed.
    #[error("Failed to delete session file {path}: {source}")]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for session store operations.
pub type Result<T> = std::result::Result<T, Error>;
