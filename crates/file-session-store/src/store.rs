//! The file session store: set, get, and destroy operations.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};

use crate::codec;
use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::lister::{DirectoryLister, GlobLister};

/// File-backed session store.
///
/// Sessions are JSON files named `<hex(id)>__<ttl-ms>.json` under the
/// configured directory. Every operation is a stateless sequence of
/// `tokio::fs` calls against that directory, so a store value can be shared
/// freely across concurrent callers; there is no locking and no retry.
///
/// Expiry is lazy: `get` compares the file's age (now minus mtime) against
/// the TTL stored in its name, and removes an expired file best-effort
/// before reporting the session as absent.
pub struct FileSessionStore<L: DirectoryLister = GlobLister> {
    directory: PathBuf,
    lister: L,
}

impl FileSessionStore<GlobLister> {
    /// Create a store over the configured directory, using the default
    /// glob-scan lister.
    ///
    /// The directory must already exist; the store never creates it.
    pub fn new(config: StoreConfig) -> Self {
        Self::with_lister(config, GlobLister)
    }
}

impl<L: DirectoryLister> FileSessionStore<L> {
    /// Create a store with a custom directory lister.
    pub fn with_lister(config: StoreConfig, lister: L) -> Self {
        Self {
            directory: config.directory,
            lister,
        }
    }

    /// The directory this store operates on.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Store a session payload under `id` with a TTL in milliseconds.
    ///
    /// The payload is serialized to JSON and written whole. Any file for
    /// the same id written earlier with a different TTL is deleted first,
    /// so the store's own writes leave at most one file per id on disk.
    pub async fn set<T>(&self, id: impl AsRef<[u8]>, payload: &T, ttl_ms: u64) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let json = serde_json::to_string(payload).map_err(Error::Serialize)?;
        let filename = codec::session_filename(&id, ttl_ms);

        self.remove_stale_versions(id.as_ref(), &filename).await?;

        let path = self.directory.join(&filename);
        tokio::fs::write(&path, json)
            .await
            .map_err(|source| Error::Write {
                path: path.clone(),
                source,
            })?;

        debug!(path = %path.display(), ttl_ms, "session stored");
        Ok(())
    }

    /// Fetch the session payload for `id`.
    ///
    /// Returns `Ok(None)` when no file exists for the id or when the record
    /// has outlived its TTL (the expired file is removed best-effort). A
    /// file that vanishes between listing and reading surfaces as
    /// [`Error::Read`], and invalid JSON as [`Error::Deserialize`]; neither
    /// is treated as "no session".
    pub async fn get<T>(&self, id: impl AsRef<[u8]>) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let pattern = codec::id_pattern(&id);
        let names = self.lister.list(&self.directory, &pattern).await?;

        // Lister order decides which file wins when several match.
        let Some(name) = names.into_iter().next() else {
            trace!(pattern = %pattern, "no session file found");
            return Ok(None);
        };

        let ttl_ms = codec::parse_ttl_ms(&name)?;
        let path = self.directory.join(&name);

        if self.age_of(&path).await? > Duration::from_millis(ttl_ms) {
            debug!(path = %path.display(), ttl_ms, "session expired");
            self.remove_expired(&path).await;
            return Ok(None);
        }

        let json = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| Error::Read {
                path: path.clone(),
                source,
            })?;

        let payload = serde_json::from_str(&json).map_err(|source| Error::Deserialize {
            path: path.clone(),
            source,
        })?;

        trace!(path = %path.display(), "session fetched");
        Ok(Some(payload))
    }

    /// Remove every session file for `id`.
    ///
    /// Succeeds trivially when nothing matches; deletion failures propagate
    /// (unlike the best-effort cleanup inside [`get`](Self::get), this
    /// deletion is the caller's explicit intent).
    pub async fn destroy(&self, id: impl AsRef<[u8]>) -> Result<()> {
        let pattern = codec::id_pattern(&id);
        let names = self.lister.list(&self.directory, &pattern).await?;

        for name in names {
            let path = self.directory.join(name);
            tokio::fs::remove_file(&path)
                .await
                .map_err(|source| Error::Delete {
                    path: path.clone(),
                    source,
                })?;
            debug!(path = %path.display(), "session destroyed");
        }

        Ok(())
    }

    /// Age of the file at `path`, from its mtime. A mtime in the future
    /// counts as age zero.
    async fn age_of(&self, path: &Path) -> Result<Duration> {
        let stat_err = |source| Error::Stat {
            path: path.to_path_buf(),
            source,
        };

        let metadata = tokio::fs::metadata(path).await.map_err(stat_err)?;
        let modified = metadata.modified().map_err(stat_err)?;

        Ok(SystemTime::now()
            .duration_since(modified)
            .unwrap_or_default())
    }

    /// Delete the files for `id` whose name differs from `keep`. Used by
    /// `set` to retire records written earlier with another TTL.
    async fn remove_stale_versions(&self, id: &[u8], keep: &str) -> Result<()> {
        let pattern = codec::id_pattern(id);
        let names = self.lister.list(&self.directory, &pattern).await?;

        for name in names {
            if name == keep {
                continue;
            }
            let path = self.directory.join(&name);
            tokio::fs::remove_file(&path)
                .await
                .map_err(|source| Error::Delete {
                    path: path.clone(),
                    source,
                })?;
            debug!(path = %path.display(), "replaced session file with different TTL");
        }

        Ok(())
    }

    /// Best-effort removal of an expired file. A failure here must not fail
    /// the surrounding `get`; the file stays eligible for cleanup on a
    /// later access.
    async fn remove_expired(&self, path: &Path) {
        match tokio::fs::remove_file(path).await {
            Ok(()) => debug!(path = %path.display(), "removed expired session file"),
            Err(error) => {
                warn!(path = %path.display(), %error, "failed to remove expired session file");
            }
        }
    }
}
