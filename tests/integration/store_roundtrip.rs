//! Stage document load/save behaviour against files on disk

use crate::helpers::{document, write_document};
use stagebook::fs::stage_store::{self, StoreError};
use stagebook::models::StageStatus;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_save_load_twice_is_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("stages.json");
    fs::write(
        &path,
        r#"{"Zeta": {"questions": ["z?"]}, "Alpha": {"questions": ["a?", "b?"], "status": "committed"}}"#,
    )
    .unwrap();

    let doc = stage_store::load(&path).expect("Should load");
    stage_store::save(&doc, &path).expect("Should save");
    let first = fs::read(&path).unwrap();

    let doc = stage_store::load(&path).expect("Should reload");
    stage_store::save(&doc, &path).expect("Should save again");
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);

    let names: Vec<_> = doc.names().map(str::to_string).collect();
    assert_eq!(names, vec!["Zeta", "Alpha"]);
}

#[test]
fn test_open_heals_legacy_document() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("stages.json");
    fs::write(
        &path,
        r#"{"Infancy": {"questions": ["First word?"]}, "Old Age": {"questions": []}}"#,
    )
    .unwrap();

    let doc = stage_store::open(&path).expect("Should open");
    assert!(doc.iter().all(|(_, s)| s.status == StageStatus::Building));

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.matches("\"status\": \"building\"").count(), 2);
}

#[test]
fn test_open_missing_document_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let err = stage_store::open(&temp_dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, StoreError::DocumentNotFound { .. }));
}

#[test]
fn test_malformed_document_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("stages.json");
    fs::write(&path, r#"{"Infancy": {"questions": "not a list"}}"#).unwrap();

    let err = stage_store::open(&path).unwrap_err();
    assert!(matches!(err, StoreError::Malformed { .. }));
    // The broken file is left as it was.
    assert!(fs::read_to_string(&path).unwrap().contains("not a list"));
}

#[test]
fn test_written_document_is_readable_json() {
    let temp_dir = TempDir::new().unwrap();
    let doc = document(&[("Teens", 3, StageStatus::Committed)]);
    let path = write_document(temp_dir.path(), &doc);

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["Teens"]["status"], "committed");
    assert_eq!(value["Teens"]["questions"][2], "Teens 3?");
}
