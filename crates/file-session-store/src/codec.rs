//! Filename codec: maps session ids and TTLs to on-disk names and back.
//!
//! A session file is named `<hex(id)>__<ttl-ms>.json`. The id's raw bytes
//! are lowercase-hex encoded, which is injective and filesystem-safe, and
//! hex never contains `_`, so the `__` separator is unambiguous. The TTL is
//! stored in the name because freshness is judged against the file's mtime
//! plus this value, without any side index.

use crate::error::{Error, Result};

/// Separator between the id fragment and the TTL segment.
const SEPARATOR: &str = "__";

/// Extension of every session file.
const EXTENSION: &str = ".json";

/// Encode a session id's raw bytes as lowercase hex.
pub(crate) fn encode_id(id: impl AsRef<[u8]>) -> String {
    hex::encode(id)
}

/// Build the filename for a session id stored with the given TTL.
pub(crate) fn session_filename(id: impl AsRef<[u8]>, ttl_ms: u64) -> String {
    format!("{}{}{}{}", encode_id(id), SEPARATOR, ttl_ms, EXTENSION)
}

/// Build the glob pattern matching any file for the id, whatever its TTL.
pub(crate) fn id_pattern(id: impl AsRef<[u8]>) -> String {
    format!("{}{}*{}", encode_id(id), SEPARATOR, EXTENSION)
}

/// Parse the TTL segment out of a filename that matched an id's pattern.
pub(crate) fn parse_ttl_ms(filename: &str) -> Result<u64> {
    filename
        .strip_suffix(EXTENSION)
        .and_then(|stem| stem.split_once(SEPARATOR))
        .and_then(|(_, ttl)| ttl.parse::<u64>().ok())
        .ok_or_else(|| Error::InvalidTtl(filename.to_string()))
}
