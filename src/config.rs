//! Configuration for stagebook.
//!
//! Settings come from a TOML file, found in this order:
//! 1. the path given with `--config`
//! 2. `./stagebook.toml`
//! 3. `<config dir>/stagebook/config.toml`
//!
//! Missing files fall back to defaults. `STAGEBOOK_DOCUMENT` overrides the
//! document path from the file; `--document` overrides both.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::models::constants::{DEFAULT_DOCUMENT, QUESTIONS_PER_PAGE};

/// Local config file name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "stagebook.toml";

/// Environment variable overriding the document path.
pub const DOCUMENT_ENV: &str = "STAGEBOOK_DOCUMENT";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("page_size must be at least 1")]
    InvalidPageSize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path of the stage document
    pub document: PathBuf,
    /// Directory export files are written to
    pub export_dir: PathBuf,
    /// Questions shown per page in the interactive session
    pub page_size: usize,
    /// Only committed stages accept answers
    pub require_commit_to_answer: bool,
    /// Default for `export` in the interactive session
    pub committed_only_export: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            document: PathBuf::from(DEFAULT_DOCUMENT),
            export_dir: PathBuf::from("."),
            page_size: QUESTIONS_PER_PAGE,
            require_commit_to_answer: true,
            committed_only_export: false,
        }
    }
}

impl Config {
    /// Parse and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Resolve the config file (see module docs) and apply env overrides.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match Self::discover() {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        Ok(config.with_env_overrides())
    }

    fn discover() -> Option<PathBuf> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }

        let global = dirs::config_dir()?.join("stagebook").join("config.toml");
        if global.is_file() {
            return Some(global);
        }

        None
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(document) = std::env::var(DOCUMENT_ENV) {
            if !document.trim().is_empty() {
                debug!(document = %document, "document path overridden from environment");
                self.document = PathBuf::from(document);
            }
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidPageSize);
        }
        Ok(())
    }
}
