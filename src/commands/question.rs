//! `stagebook question add`: append a question to a building stage.

use anyhow::Result;
use colored::Colorize;

use super::common::{print_rejection, truncate_for_display, Workspace};
use crate::models::constants::MAX_QUESTIONS;
use crate::workflow;

pub fn add(workspace: &Workspace, stage: String, text: String) -> Result<()> {
    let mut document = workspace.open_document()?;

    match workflow::add_question(&mut document, &stage, &text) {
        Ok(index) => {
            workspace.save_document(&document)?;
            println!(
                "{} Added Q{} to '{}' ({}/{MAX_QUESTIONS})",
                "✓".green(),
                index + 1,
                stage.cyan(),
                index + 1
            );
            println!("  {}", truncate_for_display(text.trim(), 60));
        }
        Err(rejection) => print_rejection(&rejection),
    }

    Ok(())
}
