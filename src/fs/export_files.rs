//! Writing export files to disk.
//!
//! Export files are named `answers_<YYYYMMDD_HHMMSS>.jsonl` and written into
//! the configured export directory. A second export within the same second
//! gets a numeric suffix (`answers_<...>_2.jsonl`) instead of replacing the
//! first. Nothing is written when there are no records.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::export::{to_jsonl, ExportRecord};

/// Result of an export attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// No qualifying answers; no file was created.
    Nothing,
    /// Records were written to `path`.
    Written { path: PathBuf, records: usize },
}

/// File name for an export taken at `at`.
pub fn export_file_name(at: DateTime<Local>) -> String {
    format!("answers_{}.jsonl", at.format("%Y%m%d_%H%M%S"))
}

/// Create a fresh export file in `dir`, never replacing an existing one.
fn create_export_file(dir: &Path, at: DateTime<Local>) -> Result<(PathBuf, File)> {
    let base = export_file_name(at);
    let stem = base.trim_end_matches(".jsonl");
    let mut attempt = 1u32;

    loop {
        let path = if attempt == 1 {
            dir.join(&base)
        } else {
            dir.join(format!("{stem}_{attempt}.jsonl"))
        };

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to create export file: {}", path.display()))
            }
        }
    }
}

/// Write `records` into `dir` as a newline-delimited JSON file.
pub fn write_export(
    dir: &Path,
    records: &[ExportRecord],
    at: DateTime<Local>,
) -> Result<ExportOutcome> {
    if records.is_empty() {
        return Ok(ExportOutcome::Nothing);
    }

    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create export directory: {}", dir.display()))?;
    }

    let content = to_jsonl(records).context("Failed to serialize export records")?;
    let (path, mut file) = create_export_file(dir, at)?;

    file.write_all(content.as_bytes())
        .and_then(|()| file.flush())
        .with_context(|| format!("Failed to write export file: {}", path.display()))?;

    info!(path = %path.display(), records = records.len(), "answers exported");
    Ok(ExportOutcome::Written {
        path,
        records: records.len(),
    })
}
