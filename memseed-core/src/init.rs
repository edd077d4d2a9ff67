//! Seeds the memory store file.
//!
//! The check-then-write is not atomic: two concurrent runs against an absent
//! path may both write. Both write the same empty document, so the last
//! writer wins with identical content.

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::MemseedError;
use crate::models::store::MemoryStore;

/// What `ensure_store` did. `Display` gives the status line printed to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    Skipped,
}

impl fmt::Display for InitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitOutcome::Created => f.write_str("Created new memory.json file"),
            InitOutcome::Skipped => f.write_str("memory.json already exists, skipping creation"),
        }
    }
}

/// Write an empty `MemoryStore` to `path` unless something already exists there.
///
/// Parent directories are not created; a missing parent is an `Io` error and
/// leaves nothing on disk.
pub fn ensure_store(path: &Path) -> Result<InitOutcome, MemseedError> {
    let exists = path.try_exists().map_err(|e| MemseedError::io(path, e))?;
    debug!(path = %path.display(), exists, "Checked memory store");

    if exists {
        debug!(path = %path.display(), "Memory store present, leaving untouched");
        return Ok(InitOutcome::Skipped);
    }

    let body = MemoryStore::empty().to_pretty_json()?;
    fs::write(path, body).map_err(|e| MemseedError::io(path, e))?;
    info!(path = %path.display(), "Created memory store");

    Ok(InitOutcome::Created)
}
