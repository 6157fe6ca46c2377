//! Stage workflow driven through the store, as the one-shot commands do it

use crate::helpers::{document, write_document};
use stagebook::fs::stage_store;
use stagebook::models::constants::{MAX_QUESTIONS, MIN_QUESTIONS_TO_COMMIT};
use stagebook::models::StageStatus;
use stagebook::workflow::{self, Rejection};
use tempfile::TempDir;

#[test]
fn test_build_then_commit_workflow() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_document(temp_dir.path(), &document(&[]));

    let mut doc = stage_store::open(&path).unwrap();
    workflow::create_stage(&mut doc, "Young Adulthood").expect("Should create stage");
    stage_store::save(&doc, &path).unwrap();

    for i in 1..=MIN_QUESTIONS_TO_COMMIT {
        let mut doc = stage_store::open(&path).unwrap();
        if i < MIN_QUESTIONS_TO_COMMIT {
            let mut attempt = doc.clone();
            assert!(matches!(
                workflow::commit(&mut attempt, "Young Adulthood"),
                Err(Rejection::TooFewQuestions { .. })
            ));
        }
        workflow::add_question(&mut doc, "Young Adulthood", &format!("Question {i}?"))
            .expect("Should add question");
        stage_store::save(&doc, &path).unwrap();
    }

    let mut doc = stage_store::open(&path).unwrap();
    workflow::commit(&mut doc, "Young Adulthood").expect("Should commit");
    stage_store::save(&doc, &path).unwrap();

    let doc = stage_store::open(&path).unwrap();
    let stage = doc.get("Young Adulthood").unwrap();
    assert_eq!(stage.status, StageStatus::Committed);
    assert_eq!(stage.question_count(), MIN_QUESTIONS_TO_COMMIT);
    assert_eq!(stage.questions[0], "Question 1?");
}

#[test]
fn test_committed_stage_is_frozen_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_document(
        temp_dir.path(),
        &document(&[("Midlife", 40, StageStatus::Committed)]),
    );
    let before = std::fs::read_to_string(&path).unwrap();

    let mut doc = stage_store::open(&path).unwrap();
    for text in ["Another?", "  ", "One more?"] {
        assert!(workflow::add_question(&mut doc, "Midlife", text).is_err());
    }
    assert!(workflow::commit(&mut doc, "Midlife").is_err());

    assert_eq!(doc.get("Midlife").unwrap().question_count(), 40);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_question_cap_applies_while_building() {
    let mut doc = document(&[("Teens", MAX_QUESTIONS, StageStatus::Building)]);
    assert_eq!(
        workflow::add_question(&mut doc, "Teens", "Fifty-first?"),
        Err(Rejection::QuestionLimit {
            stage: "Teens".to_string(),
            max: MAX_QUESTIONS
        })
    );

    workflow::commit(&mut doc, "Teens").expect("A full stage can still be committed");
}

#[test]
fn test_commit_bounds_across_counts() {
    for count in 0..=MAX_QUESTIONS {
        let mut doc = document(&[("S", count, StageStatus::Building)]);
        let result = workflow::commit(&mut doc, "S");
        if count < MIN_QUESTIONS_TO_COMMIT {
            assert!(result.is_err(), "count {count} should be rejected");
            assert_eq!(doc.get("S").unwrap().status, StageStatus::Building);
        } else {
            assert!(result.is_ok(), "count {count} should commit");
            assert_eq!(doc.get("S").unwrap().status, StageStatus::Committed);
        }
    }
}

#[test]
fn test_oversized_stages_refuse_additions() {
    for count in MAX_QUESTIONS + 1..=MAX_QUESTIONS + 5 {
        for status in [StageStatus::Building, StageStatus::Committed] {
            let mut doc = document(&[("Old Age", count, status)]);
            let before = doc.get("Old Age").unwrap().questions.clone();

            let result = workflow::add_question(&mut doc, "Old Age", "One too many?");
            match status {
                StageStatus::Building => assert_eq!(
                    result,
                    Err(Rejection::QuestionLimit {
                        stage: "Old Age".to_string(),
                        max: MAX_QUESTIONS
                    }),
                    "count {count}"
                ),
                StageStatus::Committed => assert_eq!(
                    result,
                    Err(Rejection::Frozen("Old Age".to_string())),
                    "count {count}"
                ),
            }
            assert_eq!(doc.get("Old Age").unwrap().questions, before);
        }
    }
}

#[test]
fn test_hand_edited_oversized_stage_loads_but_stays_capped() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_document(
        temp_dir.path(),
        &document(&[("Old Age", MAX_QUESTIONS + 3, StageStatus::Building)]),
    );

    let mut doc = stage_store::open(&path).unwrap();
    assert_eq!(doc.get("Old Age").unwrap().question_count(), MAX_QUESTIONS + 3);
    assert!(matches!(
        workflow::add_question(&mut doc, "Old Age", "Another?"),
        Err(Rejection::QuestionLimit { .. })
    ));
    workflow::commit(&mut doc, "Old Age").expect("An oversized stage can still be committed");
}
