//! Stage document persistence.
//!
//! The document is a single JSON object mapping stage name to
//! `{"questions": [...], "status": "building" | "committed"}`. Key order and
//! question order are kept exactly as on disk. Older documents may lack the
//! `status` key; those stages are read as `building` and the document is
//! rewritten with the field filled in the first time it is opened.

use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::atomic::atomic_write;
use crate::models::{Stage, StageDocument, StageStatus};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Stage document not found: {}", path.display())]
    DocumentNotFound { path: PathBuf },

    #[error("Failed to parse stage document {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to {action} stage document {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        source: io::Error,
    },

    #[error("Failed to serialize stage document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A stage as read from disk, before the status field is enforced.
///
/// Unknown keys are refused so that rewriting a document never drops data.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawStage {
    pub questions: Vec<String>,
    #[serde(default)]
    pub status: Option<StageStatus>,
}

pub type RawDocument = IndexMap<String, RawStage>;

/// Read and parse the document without touching missing status fields.
pub fn read_raw(path: &Path) -> Result<RawDocument, StoreError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            StoreError::DocumentNotFound {
                path: path.to_path_buf(),
            }
        } else {
            StoreError::Io {
                action: "read",
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Default any missing status to `building`.
///
/// Returns the typed document and the names of the stages that were filled in.
pub fn ensure_status_field(raw: RawDocument) -> (StageDocument, Vec<String>) {
    let mut migrated = Vec::new();
    let stages = raw
        .into_iter()
        .map(|(name, stage)| {
            let status = stage.status.unwrap_or_else(|| {
                migrated.push(name.clone());
                StageStatus::Building
            });
            (name, Stage::with_questions(stage.questions, status))
        })
        .collect();

    (StageDocument { stages }, migrated)
}

/// Load the document, treating a missing file as an empty document.
///
/// Missing status fields are defaulted in memory only; use [`open`] to
/// persist the migration.
pub fn load(path: &Path) -> Result<StageDocument, StoreError> {
    match read_raw(path) {
        Ok(raw) => Ok(ensure_status_field(raw).0),
        Err(StoreError::DocumentNotFound { .. }) => {
            debug!(path = %path.display(), "stage document absent, starting empty");
            Ok(StageDocument::new())
        }
        Err(e) => Err(e),
    }
}

/// Load a document that must already exist.
pub fn load_existing(path: &Path) -> Result<StageDocument, StoreError> {
    let raw = read_raw(path)?;
    Ok(ensure_status_field(raw).0)
}

/// Load a document that must exist, writing back any defaulted status fields.
pub fn open(path: &Path) -> Result<StageDocument, StoreError> {
    let raw = read_raw(path)?;
    let (document, migrated) = ensure_status_field(raw);

    if !migrated.is_empty() {
        warn!(
            path = %path.display(),
            stages = ?migrated,
            "stage document lacked status fields, defaulted to building"
        );
        save(&document, path)?;
    }

    debug!(path = %path.display(), stages = document.len(), "loaded stage document");
    Ok(document)
}

/// Render the document exactly as [`save`] writes it.
pub fn to_pretty_json(document: &StageDocument) -> Result<String, StoreError> {
    let mut content = serde_json::to_string_pretty(document)?;
    content.push('\n');
    Ok(content)
}

/// Overwrite the document on disk.
pub fn save(document: &StageDocument, path: &Path) -> Result<(), StoreError> {
    let content = to_pretty_json(document)?;
    atomic_write(path, &content).map_err(|source| StoreError::Io {
        action: "write",
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), stages = document.len(), "saved stage document");
    Ok(())
}
