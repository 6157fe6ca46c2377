//! Whole-file replacement for the stage document.
//!
//! Content is written to a temporary file in the target's directory and then
//! renamed over the target, so readers see either the old or the new document,
//! never a truncated one. There is no cross-process locking: concurrent writers
//! resolve as last writer wins.

use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Replace `path` with `content`.
///
/// The sequence is: create temp file next to target → write → flush → sync →
/// rename over target.
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
