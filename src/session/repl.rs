//! Line-driven driver for the interactive session.

use anyhow::{Context, Result};
use chrono::Local;
use colored::Colorize;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, info_span, warn};

use super::action::Action;
use super::reducer::{reduce, DocumentChange, Outcome};
use super::state::AppState;
use super::view::{render_page, render_progress, render_stage_list, HELP};
use crate::fs::export_files::{write_export, ExportOutcome};
use crate::fs::stage_store;

const PROMPT: &str = "stagebook> ";

/// Where the session persists its side effects.
#[derive(Debug, Clone, Copy)]
pub struct SessionContext<'a> {
    pub document_path: &'a Path,
    pub export_dir: &'a Path,
}

/// Run commands from `input` until `quit` or end of input.
///
/// The document is saved after every action that changes it. A failed save or
/// export is reported and the session carries on; a failed save rolls the
/// document back so memory and disk agree. Returns the final state so callers
/// can inspect what the session collected.
pub fn run_session<R: BufRead, W: Write>(
    mut state: AppState,
    context: SessionContext<'_>,
    input: R,
    output: &mut W,
) -> Result<AppState> {
    let span = info_span!("session", id = %state.session.id);
    let _enter = span.enter();

    writeln!(output, "Type 'help' for commands, 'quit' to leave.")?;
    if state.session.selected.is_some() {
        write!(output, "{}", render_page(&state))?;
    } else {
        write!(output, "{}", render_stage_list(&state.document, None))?;
    }

    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line.context("Failed to read session input")?;
        if line.trim().is_empty() {
            continue;
        }

        let action = match line.parse::<Action>() {
            Ok(action) => action,
            Err(e) => {
                writeln!(output, "{} {e}", "?".yellow())?;
                continue;
            }
        };
        debug!(?action, "session action");

        let previous = matches!(action, Action::AddQuestion(_) | Action::Commit)
            .then(|| state.document.clone());
        let (next, outcome) = reduce(state, action);
        state = next;

        match outcome {
            Outcome::Quit => break,
            Outcome::Help => writeln!(output, "{HELP}")?,
            Outcome::ListStages => write!(
                output,
                "{}",
                render_stage_list(&state.document, Some(&state.session.ledger))
            )?,
            Outcome::Progress => write!(output, "{}", render_progress(&state))?,
            Outcome::Rejected(rejection) => {
                writeln!(output, "{} {rejection}", "!".yellow().bold())?
            }
            Outcome::Updated => write!(output, "{}", render_page(&state))?,
            Outcome::Answered { number, .. } => {
                writeln!(output, "{} Saved answer to Q{number}", "✓".green())?;
            }
            Outcome::Persist(change) => {
                if let Err(e) = stage_store::save(&state.document, context.document_path) {
                    if let Some(previous) = previous {
                        state.document = previous;
                    }
                    warn!(error = %e, "document save failed, change rolled back");
                    writeln!(output, "{} {e}; change not applied", "✗".red().bold())?;
                    continue;
                }
                match change {
                    DocumentChange::QuestionAdded { stage, index } => writeln!(
                        output,
                        "{} Added Q{} to '{}'",
                        "✓".green(),
                        index + 1,
                        stage
                    )?,
                    DocumentChange::Committed { stage } => writeln!(
                        output,
                        "{} Committed '{}'; its questions are now open for answers",
                        "✓".green(),
                        stage
                    )?,
                }
                write!(output, "{}", render_page(&state))?;
            }
            Outcome::Export(records) => {
                match write_export(context.export_dir, &records, Local::now()) {
                    Ok(ExportOutcome::Nothing) => {
                        writeln!(output, "{} No answers filled in yet!", "!".yellow().bold())?
                    }
                    Ok(ExportOutcome::Written { path, records }) => writeln!(
                        output,
                        "{} Exported {records} answers to {}",
                        "✓".green(),
                        path.display()
                    )?,
                    Err(e) => {
                        warn!(error = %e, "export failed");
                        writeln!(
                            output,
                            "{} Export failed: {e:#}. Answers are still held; fix the export directory and retry",
                            "✗".red().bold()
                        )?
                    }
                }
            }
        }
    }

    let answered = state.session.ledger.len();
    debug!(answered, "session ended");
    Ok(state)
}
