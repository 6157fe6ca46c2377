//! In-memory answers for one interactive session.

use std::collections::HashMap;

/// Composite key: stage name plus question index within that stage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnswerKey {
    pub stage: String,
    pub index: usize,
}

impl AnswerKey {
    pub fn new(stage: impl Into<String>, index: usize) -> Self {
        Self {
            stage: stage.into(),
            index,
        }
    }
}

/// Answers keyed by (stage, question index).
///
/// Values are stored raw, including empty or whitespace-only text; such
/// entries count as unanswered. Entries are overwritten, never removed.
#[derive(Debug, Clone, Default)]
pub struct AnswerLedger {
    answers: HashMap<AnswerKey, String>,
}

impl AnswerLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, stage: &str, index: usize, answer: impl Into<String>) {
        self.answers.insert(AnswerKey::new(stage, index), answer.into());
    }

    /// The raw answer, or `""` when nothing was entered.
    pub fn get(&self, stage: &str, index: usize) -> &str {
        self.answers
            .get(&AnswerKey::new(stage, index))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn is_answered(&self, stage: &str, index: usize) -> bool {
        !self.get(stage, index).trim().is_empty()
    }

    /// Number of questions in `0..question_count` with a non-blank answer.
    pub fn answered_count(&self, stage: &str, question_count: usize) -> usize {
        (0..question_count)
            .filter(|&index| self.is_answered(stage, index))
            .count()
    }

    /// Fraction of answered questions; an empty stage counts as complete.
    pub fn progress(&self, stage: &str, question_count: usize) -> f64 {
        if question_count == 0 {
            return 1.0;
        }
        self.answered_count(stage, question_count) as f64 / question_count as f64
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}
