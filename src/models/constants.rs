/// Maximum number of questions a stage may hold.
/// Additions are refused once a stage reaches this count, whatever its status.
pub const MAX_QUESTIONS: usize = 50;

/// Minimum number of questions a stage needs before it can be committed.
pub const MIN_QUESTIONS_TO_COMMIT: usize = 30;

/// Default number of questions shown per page.
pub const QUESTIONS_PER_PAGE: usize = 5;

/// Default stage document file name, relative to the working directory.
pub const DEFAULT_DOCUMENT: &str = "ages_and_stages.json";

/// Maximum length of a single question, in characters.
pub const MAX_QUESTION_LENGTH: usize = 500;

/// Maximum length of a stage name, in characters.
pub const MAX_STAGE_NAME_LENGTH: usize = 128;
