use super::types::{Stage, StageDocument, StageStatus};
use crate::models::constants::{MAX_QUESTIONS, MIN_QUESTIONS_TO_COMMIT};

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_questions(questions: Vec<String>, status: StageStatus) -> Self {
        Self { questions, status }
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn question(&self, index: usize) -> Option<&str> {
        self.questions.get(index).map(String::as_str)
    }

    pub fn is_committed(&self) -> bool {
        self.status == StageStatus::Committed
    }

    /// Whether the question list is still open and below the cap.
    pub fn accepts_questions(&self) -> bool {
        self.status == StageStatus::Building && self.question_count() < MAX_QUESTIONS
    }

    /// Whether a commit would currently be accepted.
    pub fn ready_to_commit(&self) -> bool {
        self.status == StageStatus::Building && self.question_count() >= MIN_QUESTIONS_TO_COMMIT
    }
}

impl StageDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Stage> {
        self.stages.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Stage> {
        self.stages.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.stages.contains_key(name)
    }

    /// Stage names in document order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.stages.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Stage)> {
        self.stages.iter().map(|(name, stage)| (name.as_str(), stage))
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Append a new empty stage. Returns false if the name is already taken.
    pub fn insert_stage(&mut self, name: String) -> bool {
        if self.stages.contains_key(&name) {
            return false;
        }
        self.stages.insert(name, Stage::new());
        true
    }
}
