//! `stagebook init`: create an empty stage document.

use anyhow::{bail, Result};
use colored::Colorize;

use super::common::Workspace;
use crate::models::StageDocument;

pub fn execute(workspace: &Workspace, force: bool) -> Result<()> {
    let path = workspace.document_path();

    if path.exists() && !force {
        bail!(
            "Stage document already exists: {}. Use --force to replace it.",
            path.display()
        );
    }

    workspace.save_document(&StageDocument::new())?;

    println!(
        "{} Created empty stage document {}",
        "✓".green(),
        path.display().to_string().cyan()
    );
    println!("  Add stages with 'stagebook stage create <name>'");

    Ok(())
}
