//! State transitions for the interactive session.
//!
//! [`reduce`] performs no I/O. Persisting the document and writing export files
//! is left to the caller, driven by the returned [`Outcome`].

use super::action::Action;
use super::state::AppState;
use crate::export::{collect, ExportRecord};
use crate::workflow::{self, Rejection};

/// A change to the stage document that must be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentChange {
    QuestionAdded { stage: String, index: usize },
    Committed { stage: String },
}

/// What the driver should do after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Session state changed (or was re-displayed); re-render the page.
    Updated,
    /// An answer was recorded.
    Answered { stage: String, number: usize },
    /// The document changed and must be saved before the next action.
    Persist(DocumentChange),
    /// Records to export; may be empty.
    Export(Vec<ExportRecord>),
    /// The action was refused; state is unchanged.
    Rejected(Rejection),
    ListStages,
    Progress,
    Help,
    Quit,
}

fn selected(state: &AppState) -> Result<String, Rejection> {
    state
        .session
        .selected
        .clone()
        .ok_or(Rejection::NoStageSelected)
}

/// Apply `action` to `state`.
pub fn reduce(mut state: AppState, action: Action) -> (AppState, Outcome) {
    let outcome = match apply(&mut state, action) {
        Ok(outcome) => outcome,
        Err(rejection) => Outcome::Rejected(rejection),
    };
    (state, outcome)
}

fn apply(state: &mut AppState, action: Action) -> Result<Outcome, Rejection> {
    match action {
        Action::ListStages => Ok(Outcome::ListStages),
        Action::Progress => Ok(Outcome::Progress),
        Action::Help => Ok(Outcome::Help),
        Action::Quit => Ok(Outcome::Quit),
        Action::Show => {
            selected(state)?;
            Ok(Outcome::Updated)
        }
        Action::Select(name) => {
            if !state.document.contains(&name) {
                return Err(Rejection::UnknownStage(name));
            }
            state.session.selected = Some(name);
            Ok(Outcome::Updated)
        }
        Action::NextPage => {
            let stage = selected(state)?;
            let page = state.pager(&stage).next(state.session.page(&stage));
            state.session.set_page(&stage, page);
            Ok(Outcome::Updated)
        }
        Action::PrevPage => {
            let stage = selected(state)?;
            let page = state.pager(&stage).prev(state.session.page(&stage));
            state.session.set_page(&stage, page);
            Ok(Outcome::Updated)
        }
        Action::GoToPage(page) => {
            let stage = selected(state)?;
            let page = state.pager(&stage).clamp(page);
            state.session.set_page(&stage, page);
            Ok(Outcome::Updated)
        }
        Action::Answer { number, text } => {
            let stage = selected(state)?;
            let Some(index) = number.checked_sub(1) else {
                let count = state
                    .document
                    .get(&stage)
                    .map(|s| s.question_count())
                    .unwrap_or(0);
                return Err(Rejection::NoSuchQuestion {
                    stage,
                    number,
                    count,
                });
            };
            workflow::check_answerable(
                &state.document,
                &stage,
                index,
                state.settings.require_commit_to_answer,
            )?;
            state.session.ledger.set(&stage, index, text);
            Ok(Outcome::Answered { stage, number })
        }
        Action::AddQuestion(text) => {
            let stage = selected(state)?;
            let index = workflow::add_question(&mut state.document, &stage, &text)?;
            let page = state.pager(&stage).page_of(index);
            state.session.set_page(&stage, page);
            Ok(Outcome::Persist(DocumentChange::QuestionAdded { stage, index }))
        }
        Action::Commit => {
            let stage = selected(state)?;
            workflow::commit(&mut state.document, &stage)?;
            Ok(Outcome::Persist(DocumentChange::Committed { stage }))
        }
        Action::Export { committed_only } => {
            let committed_only = committed_only.unwrap_or(state.settings.committed_only_export);
            let records = collect(&state.document, &state.session.ledger, committed_only);
            Ok(Outcome::Export(records))
        }
    }
}
