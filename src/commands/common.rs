//! Shared helpers for command handlers.

use anyhow::{bail, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::fs::stage_store::{self, StoreError};
use crate::models::StageDocument;
use crate::workflow::Rejection;

/// Resolved settings for one CLI invocation.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub config: Config,
}

impl Workspace {
    /// Load configuration, letting `--document` override the configured path.
    pub fn resolve(config_path: Option<&Path>, document: Option<PathBuf>) -> Result<Self> {
        let mut config = Config::load(config_path)?;
        if let Some(document) = document {
            config.document = document;
        }
        Ok(Self { config })
    }

    pub fn document_path(&self) -> &Path {
        &self.config.document
    }

    /// Open the stage document, which must exist.
    ///
    /// Migrates missing status fields on the way in.
    pub fn open_document(&self) -> Result<StageDocument> {
        match stage_store::open(self.document_path()) {
            Ok(document) => Ok(document),
            Err(StoreError::DocumentNotFound { path }) => bail!(
                "JSON file not found: {}. Run 'stagebook init' or pass --document <PATH>.",
                path.display()
            ),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save_document(&self, document: &StageDocument) -> Result<()> {
        stage_store::save(document, self.document_path())?;
        Ok(())
    }
}

/// Print a policy rejection. Rejections are not failures.
pub fn print_rejection(rejection: &Rejection) {
    println!("{} {rejection}", "!".yellow().bold());
}

/// Render a command failure for stderr, including its context chain.
pub fn format_error(error: &anyhow::Error) -> String {
    format!("{} {error:#}", "Error:".red().bold())
}

/// Truncate a string for display, using UTF-8 safe character-based truncation.
///
/// Multi-line strings are collapsed to a single line first.
pub fn truncate_for_display(s: &str, max_len: usize) -> String {
    let single_line: String = s.lines().collect::<Vec<_>>().join(" ");

    if single_line.chars().count() <= max_len {
        single_line
    } else {
        let truncated: String = single_line
            .chars()
            .take(max_len.saturating_sub(1))
            .collect();
        format!("{truncated}…")
    }
}
