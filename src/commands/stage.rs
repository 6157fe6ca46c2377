//! Stage command implementations.
//!
//! Commands:
//! - `stagebook stage create <name>` - Append a new building stage
//! - `stagebook stage show <name> [--page N]` - Print one page of questions
//! - `stagebook stage commit <name>` - Freeze a stage's question set

use anyhow::Result;
use colored::Colorize;

use super::common::{print_rejection, Workspace};
use crate::models::constants::MIN_QUESTIONS_TO_COMMIT;
use crate::session::view::render_questions;
use crate::session::Pager;
use crate::validation::validate_stage_name;
use crate::workflow;

pub fn create(workspace: &Workspace, name: String) -> Result<()> {
    validate_stage_name(&name)?;
    let mut document = workspace.open_document()?;

    match workflow::create_stage(&mut document, &name) {
        Ok(()) => {
            workspace.save_document(&document)?;
            println!("{} Created stage '{}'", "✓".green(), name.cyan());
            println!(
                "  Add at least {MIN_QUESTIONS_TO_COMMIT} questions, then run 'stagebook stage commit'"
            );
        }
        Err(rejection) => print_rejection(&rejection),
    }

    Ok(())
}

/// Show one page (1-based) of a stage's questions.
pub fn show(workspace: &Workspace, name: String, page: usize) -> Result<()> {
    let document = workspace.open_document()?;
    let stage = match workflow::find_stage(&document, &name) {
        Ok(stage) => stage,
        Err(rejection) => {
            print_rejection(&rejection);
            return Ok(());
        }
    };

    let pager = Pager::new(stage.question_count(), workspace.config.page_size);
    let index = page.saturating_sub(1);
    if index > pager.last_page() {
        println!(
            "{} Page {page} is past the end; showing page {}",
            "!".yellow().bold(),
            pager.page_count()
        );
    }

    print!("{}", render_questions(&name, stage, &pager, index, None));
    Ok(())
}

pub fn commit(workspace: &Workspace, name: String) -> Result<()> {
    let mut document = workspace.open_document()?;

    match workflow::commit(&mut document, &name) {
        Ok(()) => {
            workspace.save_document(&document)?;
            println!(
                "{} Committed '{}'; questions are frozen and open for answers",
                "✓".green(),
                name.cyan()
            );
        }
        Err(rejection) => print_rejection(&rejection),
    }

    Ok(())
}
