//! Input validation for stage names supplied on the command line.
//!
//! Stage names are JSON object keys, not file paths, so any printable text is
//! allowed. Control characters and surrounding whitespace are refused because
//! they make names impossible to type back in the interactive session.

use anyhow::{bail, Result};

use crate::models::constants::MAX_STAGE_NAME_LENGTH;

/// Validates a stage name.
///
/// A name is valid if:
/// - It is not empty or whitespace-only
/// - It has no leading or trailing whitespace
/// - It is no longer than `MAX_STAGE_NAME_LENGTH` characters
/// - It contains no control characters
///
/// # Examples
///
/// ```
/// use stagebook::validation::validate_stage_name;
///
/// assert!(validate_stage_name("Early Childhood (0-5)").is_ok());
/// assert!(validate_stage_name("").is_err());
/// assert!(validate_stage_name(" padded ").is_err());
/// ```
pub fn validate_stage_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        bail!("Stage name cannot be empty");
    }

    if name.trim() != name {
        bail!("Stage name '{name}' has leading or trailing whitespace");
    }

    let len = name.chars().count();
    if len > MAX_STAGE_NAME_LENGTH {
        bail!("Stage name too long: {len} characters (max {MAX_STAGE_NAME_LENGTH})");
    }

    if name.chars().any(char::is_control) {
        bail!("Stage name contains control characters");
    }

    Ok(())
}

/// Clap value parser for stage name arguments.
pub fn clap_stage_name_validator(s: &str) -> Result<String, String> {
    validate_stage_name(s).map_err(|e| e.to_string())?;
    Ok(s.to_string())
}
