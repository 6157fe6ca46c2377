//! Stage workflow: the building → committed gate.
//!
//! While a stage is `building` its question list may grow, up to
//! `MAX_QUESTIONS`. Committing needs at least `MIN_QUESTIONS_TO_COMMIT`
//! questions and freezes the list for good, because answers are keyed by
//! question index. Refused operations come back as a [`Rejection`] and leave the
//! document untouched; callers persist the document after every `Ok`.

use tracing::{info, warn};

use crate::models::constants::{
    MAX_QUESTIONS, MAX_QUESTION_LENGTH, MIN_QUESTIONS_TO_COMMIT,
};
use crate::models::{Stage, StageDocument, StageStatus};

/// A policy refusal. Never fatal; the session carries on unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("Stage '{0}' does not exist")]
    UnknownStage(String),

    #[error("Stage '{0}' already exists")]
    StageExists(String),

    #[error("No stage selected. Use 'use <stage>' first")]
    NoStageSelected,

    #[error("Question text is empty")]
    EmptyQuestion,

    #[error("Question too long: {len} characters (max {max})")]
    QuestionTooLong { len: usize, max: usize },

    #[error("Stage '{0}' is committed; its question set is frozen")]
    Frozen(String),

    #[error("Stage '{stage}' already holds the maximum of {max} questions")]
    QuestionLimit { stage: String, max: usize },

    #[error("Stage '{stage}' has {count} questions; {min} are needed to commit")]
    TooFewQuestions {
        stage: String,
        count: usize,
        min: usize,
    },

    #[error("Stage '{0}' is already committed")]
    AlreadyCommitted(String),

    #[error("Stage '{0}' is still building; commit it before answering")]
    NotCommitted(String),

    #[error("Question {number} does not exist in stage '{stage}' ({count} questions)")]
    NoSuchQuestion {
        stage: String,
        number: usize,
        count: usize,
    },
}

/// Look up a stage, rejecting unknown names.
pub fn find_stage<'a>(document: &'a StageDocument, name: &str) -> Result<&'a Stage, Rejection> {
    document
        .get(name)
        .ok_or_else(|| Rejection::UnknownStage(name.to_string()))
}

/// Append a question to a building stage.
///
/// The text is trimmed before it is stored. Returns the new question's index.
pub fn add_question(
    document: &mut StageDocument,
    stage_name: &str,
    text: &str,
) -> Result<usize, Rejection> {
    let text = text.trim();
    if let Err(rejection) = check_add_question(document, stage_name, text) {
        warn!(stage = stage_name, %rejection, "add question rejected");
        return Err(rejection);
    }

    let stage = document
        .get_mut(stage_name)
        .ok_or_else(|| Rejection::UnknownStage(stage_name.to_string()))?;
    stage.questions.push(text.to_string());
    let index = stage.question_count() - 1;

    info!(stage = stage_name, index, "question added");
    Ok(index)
}

fn check_add_question(
    document: &StageDocument,
    stage_name: &str,
    text: &str,
) -> Result<(), Rejection> {
    let stage = find_stage(document, stage_name)?;

    if stage.status == StageStatus::Committed {
        return Err(Rejection::Frozen(stage_name.to_string()));
    }

    if stage.question_count() >= MAX_QUESTIONS {
        return Err(Rejection::QuestionLimit {
            stage: stage_name.to_string(),
            max: MAX_QUESTIONS,
        });
    }

    if text.is_empty() {
        return Err(Rejection::EmptyQuestion);
    }

    let len = text.chars().count();
    if len > MAX_QUESTION_LENGTH {
        return Err(Rejection::QuestionTooLong {
            len,
            max: MAX_QUESTION_LENGTH,
        });
    }

    Ok(())
}

/// Move a building stage with enough questions to `committed`.
pub fn commit(document: &mut StageDocument, stage_name: &str) -> Result<(), Rejection> {
    let stage = document
        .get_mut(stage_name)
        .ok_or_else(|| Rejection::UnknownStage(stage_name.to_string()))?;

    if stage.status == StageStatus::Committed {
        warn!(stage = stage_name, "commit rejected: already committed");
        return Err(Rejection::AlreadyCommitted(stage_name.to_string()));
    }

    let count = stage.question_count();
    if count < MIN_QUESTIONS_TO_COMMIT {
        warn!(stage = stage_name, count, "commit rejected: too few questions");
        return Err(Rejection::TooFewQuestions {
            stage: stage_name.to_string(),
            count,
            min: MIN_QUESTIONS_TO_COMMIT,
        });
    }

    stage.status = stage
        .status
        .try_transition(StageStatus::Committed)
        .map_err(|_| Rejection::AlreadyCommitted(stage_name.to_string()))?;

    info!(stage = stage_name, count, "stage committed");
    Ok(())
}

/// Check that question `index` of a stage may receive an answer.
///
/// With `require_commit` set, only committed stages accept answers. Committed
/// answers stay editable.
pub fn check_answerable(
    document: &StageDocument,
    stage_name: &str,
    index: usize,
    require_commit: bool,
) -> Result<(), Rejection> {
    let stage = find_stage(document, stage_name)?;

    if require_commit && !stage.is_committed() {
        return Err(Rejection::NotCommitted(stage_name.to_string()));
    }

    if index >= stage.question_count() {
        return Err(Rejection::NoSuchQuestion {
            stage: stage_name.to_string(),
            number: index + 1,
            count: stage.question_count(),
        });
    }

    Ok(())
}

/// Append a new, empty `building` stage.
pub fn create_stage(document: &mut StageDocument, name: &str) -> Result<(), Rejection> {
    if !document.insert_stage(name.to_string()) {
        return Err(Rejection::StageExists(name.to_string()));
    }
    info!(stage = name, "stage created");
    Ok(())
}
