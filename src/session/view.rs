//! Text rendering for the interactive session and the one-shot commands.

use colored::Colorize;

use super::ledger::AnswerLedger;
use super::pagination::Pager;
use super::state::AppState;
use crate::commands::common::truncate_for_display;
use crate::models::{Stage, StageDocument, StageStatus};

pub const HELP: &str = "\
Commands:
  stages                  List stages with status and progress
  use <stage>             Select a stage
  show                    Show the current page
  next | prev             Move one page forward or back
  page <n>                Jump to page n
  answer <n> <text>       Answer question n (empty text clears it)
  add <text>              Add a question to a building stage
  commit                  Freeze the question set of the selected stage
  progress                Show answer progress for every stage
  export [--all|--committed]
                          Write answers to answers_<timestamp>.jsonl
  help                    Show this help
  quit                    End the session (unexported answers are lost)";

pub fn format_status(status: StageStatus) -> String {
    paint_status(status, &status.to_string())
}

/// Colour `text` by `status`. Pad `text` before calling; escape codes defeat
/// width specifiers.
fn paint_status(status: StageStatus, text: &str) -> String {
    match status {
        StageStatus::Building => text.yellow().to_string(),
        StageStatus::Committed => text.green().to_string(),
    }
}

/// `Answered X of Y questions for <stage>`, with a percentage.
pub fn progress_line(ledger: &AnswerLedger, name: &str, stage: &Stage) -> String {
    let count = stage.question_count();
    let answered = ledger.answered_count(name, count);
    let percent = (ledger.progress(name, count) * 100.0).round() as u32;
    format!("Answered {answered} of {count} questions for {} ({percent}%)", name.bold())
}

/// One line per stage: name, status, question count and readiness.
pub fn render_stage_list(document: &StageDocument, ledger: Option<&AnswerLedger>) -> String {
    if document.is_empty() {
        return format!("{}\n", "No stages defined.".dimmed());
    }

    let width = document.names().map(|n| n.chars().count()).max().unwrap_or(0);
    let mut output = String::new();

    for (name, stage) in document.iter() {
        let count = stage.question_count();
        let status = paint_status(stage.status, &format!("{:<9}", stage.status.to_string()));
        let mut line = format!("{name:<width$}  {status}  {count:>2} questions");

        if let Some(ledger) = ledger {
            line.push_str(&format!(
                "  {}/{count} answered",
                ledger.answered_count(name, count)
            ));
        }

        if stage.ready_to_commit() {
            line.push_str(&format!("  {}", "ready to commit".cyan()));
        } else if !stage.accepts_questions() && !stage.is_committed() {
            line.push_str(&format!("  {}", "full".red()));
        }

        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Questions `window` of `stage`, with answers from `ledger` when given.
pub fn render_questions(
    name: &str,
    stage: &Stage,
    pager: &Pager,
    page: usize,
    ledger: Option<&AnswerLedger>,
) -> String {
    let page = pager.clamp(page);
    let window = pager.window(page);
    let mut output = String::new();

    output.push_str(&format!(
        "{} [{}]\n",
        name.bold(),
        format_status(stage.status)
    ));

    if window.is_empty() {
        output.push_str(&format!("{}\n", "No questions yet.".dimmed()));
        return output;
    }

    output.push_str(&format!(
        "### Questions {}-{} (page {} of {})\n",
        window.start + 1,
        window.end,
        page + 1,
        pager.page_count()
    ));

    for index in window {
        let question = stage.question(index).unwrap_or_default();
        output.push_str(&format!("Q{}: {question}\n", index + 1));

        if let Some(ledger) = ledger {
            let answer = ledger.get(name, index);
            if answer.trim().is_empty() {
                output.push_str(&format!("    {}\n", "(unanswered)".dimmed()));
            } else {
                output.push_str(&format!("    > {}\n", truncate_for_display(answer, 70)));
            }
        }
    }

    output
}

/// The selected stage's current page with its progress line.
pub fn render_page(state: &AppState) -> String {
    let Some(name) = state.session.selected.as_deref() else {
        return "No stage selected. Use 'use <stage>' to pick one.\n".to_string();
    };
    let Some(stage) = state.document.get(name) else {
        return format!("Stage '{name}' no longer exists.\n");
    };

    let pager = state.pager(name);
    let page = state.current_page(name);
    let mut output = render_questions(name, stage, &pager, page, Some(&state.session.ledger));
    output.push_str(&progress_line(&state.session.ledger, name, stage));
    output.push('\n');
    output
}

/// Progress of every stage in document order.
pub fn render_progress(state: &AppState) -> String {
    state
        .document
        .iter()
        .map(|(name, stage)| format!("{}\n", progress_line(&state.session.ledger, name, stage)))
        .collect()
}
