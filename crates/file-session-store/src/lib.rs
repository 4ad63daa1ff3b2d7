//! File-backed session persistence with per-record TTL expiry.
//!
//! Each session is stored as a single file named `<hex(id)>__<ttl-ms>.json`
//! in a configured directory. The TTL travels in the filename, so a record
//! is judged fresh or expired from the file's mtime alone; there is no
//! index, no background sweeper, and no locking. Expired records are
//! detected (and cleaned up best-effort) lazily on read.
//!
//! # Example
//!
//! ```rust,ignore
//! use file_session_store::{FileSessionStore, StoreConfig};
//!
//! let store = FileSessionStore::new(
//!     StoreConfig::default().with_directory("/var/lib/app/sessions"),
//! );
//!
//! store.set(b"session-id", &payload, 60_000).await?;
//! let payload: Option<Payload> = store.get(b"session-id").await?;
//! store.destroy(b"session-id").await?;
//! ```

mod codec;
mod config;
mod error;
mod lister;
mod store;

pub use config::{DEFAULT_SESSION_DIR, StoreConfig};
pub use error::{Error, Result};
pub use lister::{DirectoryLister, GlobLister};
pub use store::FileSessionStore;
