//! Scripted interactive sessions, end to end through files on disk

use crate::helpers::{document, jsonl_files, write_document};
use stagebook::export::ExportRecord;
use stagebook::fs::stage_store;
use stagebook::models::StageStatus;
use stagebook::session::{run_session, AppState, SessionContext, SessionSettings};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn run(dir: &Path, state: AppState, script: &str) -> (AppState, String) {
    run_exporting_to(dir, &dir.join("exports"), state, script)
}

fn run_exporting_to(
    dir: &Path,
    export_dir: &Path,
    state: AppState,
    script: &str,
) -> (AppState, String) {
    colored::control::set_override(false);
    let document_path = dir.join("stages.json");
    let context = SessionContext {
        document_path: &document_path,
        export_dir,
    };
    let mut output = Vec::new();
    let state = run_session(state, context, script.as_bytes(), &mut output)
        .expect("Session should run");
    (state, String::from_utf8(output).expect("Output should be UTF-8"))
}

fn read_export(dir: &Path) -> Vec<ExportRecord> {
    let files = jsonl_files(&dir.join("exports"));
    assert_eq!(files.len(), 1, "expected exactly one export file");

    let content = fs::read_to_string(&files[0]).unwrap();
    assert!(content.ends_with('\n'));
    content
        .lines()
        .map(|line| serde_json::from_str(line).expect("Each line should be a JSON object"))
        .collect()
}

#[test]
fn test_committed_only_export_skips_building_stages() {
    let temp_dir = TempDir::new().unwrap();
    let doc = document(&[
        ("A", 30, StageStatus::Committed),
        ("B", 3, StageStatus::Building),
    ]);
    write_document(temp_dir.path(), &doc);

    let settings = SessionSettings {
        require_commit_to_answer: false,
        ..SessionSettings::default()
    };
    let state = AppState::new(doc, settings);
    let script = "use A\nanswer 1 x\nuse B\nanswer 1 y\nexport --committed\nquit\n";
    let (_, output) = run(temp_dir.path(), state, script);

    assert!(output.contains("Exported 1 answers"));
    assert_eq!(
        read_export(temp_dir.path()),
        vec![ExportRecord {
            stage: "A".to_string(),
            question: "A 1?".to_string(),
            answer: "x".to_string(),
        }]
    );
}

#[test]
fn test_build_commit_answer_export() {
    let temp_dir = TempDir::new().unwrap();
    let doc = document(&[("Childhood", 29, StageStatus::Building)]);
    write_document(temp_dir.path(), &doc);

    let state = AppState::new(doc, SessionSettings::default());
    let script = "\
use Childhood
answer 1 too soon
commit
add Where did you spend summers?
commit
page 6
answer 30 Au bord de la mer, chez ma grand-mère
answer 2 In Kyōto 京都
answer 3 draft
answer 3
export
quit
";
    let (state, output) = run(temp_dir.path(), state, script);

    assert!(output.contains("still building"));
    assert!(output.contains("29 questions; 30 are needed"));
    assert!(output.contains("Added Q30 to 'Childhood'"));
    assert!(output.contains("Committed 'Childhood'"));
    assert!(output.contains("### Questions 26-30 (page 6 of 6)"));

    let on_disk = stage_store::load(&temp_dir.path().join("stages.json")).unwrap();
    let stage = on_disk.get("Childhood").unwrap();
    assert_eq!(stage.status, StageStatus::Committed);
    assert_eq!(stage.questions[29], "Where did you spend summers?");
    assert_eq!(on_disk, state.document);

    let records = read_export(temp_dir.path());
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].question, "Childhood 2?");
    assert_eq!(records[0].answer, "In Kyōto 京都");
    assert_eq!(records[1].question, "Where did you spend summers?");
    assert_eq!(records[1].answer, "Au bord de la mer, chez ma grand-mère");

    let raw = fs::read_to_string(&jsonl_files(&temp_dir.path().join("exports"))[0]).unwrap();
    assert!(raw.contains("京都"), "non-ASCII text should not be escaped");
}

#[test]
fn test_rejected_actions_leave_document_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let doc = document(&[("Midlife", 50, StageStatus::Committed)]);
    let path = write_document(temp_dir.path(), &doc);
    let before = fs::read_to_string(&path).unwrap();

    let state = AppState::new(doc, SessionSettings::default());
    let script = "use Midlife\nadd One more?\ncommit\nanswer 51 nope\nuse Nowhere\n";
    let (state, output) = run(temp_dir.path(), state, script);

    assert!(output.contains("is committed; its question set is frozen"));
    assert!(output.contains("is already committed"));
    assert!(output.contains("Question 51 does not exist"));
    assert!(output.contains("Stage 'Nowhere' does not exist"));
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
    assert_eq!(state.session.selected.as_deref(), Some("Midlife"));
}

#[test]
fn test_answers_do_not_outlive_session() {
    let temp_dir = TempDir::new().unwrap();
    let doc = document(&[("Teens", 30, StageStatus::Committed)]);
    write_document(temp_dir.path(), &doc);

    let state = AppState::new(doc.clone(), SessionSettings::default());
    let (state, _) = run(temp_dir.path(), state, "use Teens\nanswer 1 kept here\nquit\n");
    assert_eq!(state.session.ledger.len(), 1);

    let fresh = AppState::new(doc, SessionSettings::default());
    let (_, output) = run(temp_dir.path(), fresh, "export\n");
    assert!(output.contains("No answers filled in yet!"));
    assert!(!temp_dir.path().join("exports").exists());
}

#[test]
fn test_failed_export_keeps_session_and_answers() {
    let temp_dir = TempDir::new().unwrap();
    let doc = document(&[("Teens", 30, StageStatus::Committed)]);
    write_document(temp_dir.path(), &doc);
    let not_a_dir = temp_dir.path().join("not_a_dir");
    fs::write(&not_a_dir, "").unwrap();

    let state = AppState::new(doc, SessionSettings::default());
    let script = "use Teens\nanswer 1 precious answer\nexport\nanswer 2 another\nquit\n";
    let (state, output) = run_exporting_to(temp_dir.path(), &not_a_dir, state, script);

    assert!(output.contains("✗ Export failed"));
    assert!(output.contains("Saved answer to Q2"));
    assert_eq!(state.session.ledger.get("Teens", 0), "precious answer");
    assert_eq!(state.session.ledger.get("Teens", 1), "another");

    let (_, output) = run(temp_dir.path(), state, "export\n");
    assert!(output.contains("Exported 2 answers"));
    assert_eq!(read_export(temp_dir.path()).len(), 2);
}
