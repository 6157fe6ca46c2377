//! Shared fixtures for integration tests

use stagebook::fs::stage_store;
use stagebook::models::{Stage, StageDocument, StageStatus};
use std::path::{Path, PathBuf};

/// Questions named `<prefix> 1?`, `<prefix> 2?`, ...
pub fn questions(prefix: &str, count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("{prefix} {i}?")).collect()
}

pub fn document(stages: &[(&str, usize, StageStatus)]) -> StageDocument {
    let mut document = StageDocument::new();
    for (name, count, status) in stages {
        document.stages.insert(
            name.to_string(),
            Stage::with_questions(questions(name, *count), *status),
        );
    }
    document
}

/// Save `document` as `stages.json` in `dir` and return its path.
pub fn write_document(dir: &Path, document: &StageDocument) -> PathBuf {
    let path = dir.join("stages.json");
    stage_store::save(document, &path).expect("Should save document");
    path
}

pub fn jsonl_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<_> = std::fs::read_dir(dir)
        .expect("Should read dir")
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "jsonl"))
        .collect();
    files.sort();
    files
}
