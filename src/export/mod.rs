//! Export of collected answers as newline-delimited JSON.
//!
//! Records are produced in document order: stages as they appear in the stage
//! document, then questions in list order. Blank answers are skipped.

use serde::{Deserialize, Serialize};

use crate::models::StageDocument;
use crate::session::ledger::AnswerLedger;

/// One exported (stage, question, answer) triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub stage: String,
    pub question: String,
    pub answer: String,
}

/// Join the document with the ledger.
///
/// With `committed_only`, stages that are not committed are skipped entirely.
pub fn collect(
    document: &StageDocument,
    ledger: &AnswerLedger,
    committed_only: bool,
) -> Vec<ExportRecord> {
    document
        .iter()
        .filter(|(_, stage)| !committed_only || stage.is_committed())
        .flat_map(|(name, stage)| {
            stage
                .questions
                .iter()
                .enumerate()
                .filter(move |(index, _)| ledger.is_answered(name, *index))
                .map(move |(index, question)| ExportRecord {
                    stage: name.to_string(),
                    question: question.clone(),
                    answer: ledger.get(name, index).to_string(),
                })
        })
        .collect()
}

/// Serialize records one JSON object per line, each line newline-terminated.
///
/// Non-ASCII text is written as UTF-8, not escaped.
pub fn to_jsonl(records: &[ExportRecord]) -> serde_json::Result<String> {
    let mut output = String::new();
    for record in records {
        output.push_str(&serde_json::to_string(record)?);
        output.push('\n');
    }
    Ok(output)
}
