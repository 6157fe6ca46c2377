use std::collections::HashMap;
use uuid::Uuid;

use super::ledger::AnswerLedger;
use super::pagination::Pager;
use crate::config::Config;
use crate::models::constants::QUESTIONS_PER_PAGE;
use crate::models::StageDocument;

/// Per-session mutable state: selection, answers and page positions.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub id: Uuid,
    pub selected: Option<String>,
    pub ledger: AnswerLedger,
    pages: HashMap<String, usize>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            selected: None,
            ledger: AnswerLedger::new(),
            pages: HashMap::new(),
        }
    }

    /// Stored page for `stage`; 0 if the stage was never paged.
    pub fn page(&self, stage: &str) -> usize {
        self.pages.get(stage).copied().unwrap_or(0)
    }

    pub fn set_page(&mut self, stage: &str, page: usize) {
        self.pages.insert(stage.to_string(), page);
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Session behaviour taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub page_size: usize,
    pub require_commit_to_answer: bool,
    pub committed_only_export: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            page_size: QUESTIONS_PER_PAGE,
            require_commit_to_answer: true,
            committed_only_export: false,
        }
    }
}

impl From<&Config> for SessionSettings {
    fn from(config: &Config) -> Self {
        Self {
            page_size: config.page_size,
            require_commit_to_answer: config.require_commit_to_answer,
            committed_only_export: config.committed_only_export,
        }
    }
}

/// Everything the reducer works on.
#[derive(Debug, Clone)]
pub struct AppState {
    pub document: StageDocument,
    pub session: SessionState,
    pub settings: SessionSettings,
}

impl AppState {
    pub fn new(document: StageDocument, settings: SessionSettings) -> Self {
        Self {
            document,
            session: SessionState::new(),
            settings,
        }
    }

    /// Pager for `stage` at its current question count.
    pub fn pager(&self, stage: &str) -> Pager {
        let count = self
            .document
            .get(stage)
            .map(|s| s.question_count())
            .unwrap_or(0);
        Pager::new(count, self.settings.page_size)
    }

    /// Current page of `stage`, clamped to its page range.
    pub fn current_page(&self, stage: &str) -> usize {
        self.pager(stage).clamp(self.session.page(stage))
    }
}
