//! Tests for the screenplay JSON artifact.

mod common;

use common::tea_stall;
use masterscript_core::Screenplay;
use masterscript_error::{ExportError, ExportErrorKind};
use masterscript_render::export::{to_json, write_json};

#[test]
fn test_json_uses_camel_case_keys() {
    let json = to_json(&tea_stall()).unwrap();
    assert!(json.contains("\"sceneNumber\": 1"));
    assert!(json.contains("\"editingNote\""));
    assert!(!json.contains("scene_number"));
}

#[tokio::test]
async fn test_write_json_reads_back_identically() {
    let dir = tempfile::tempdir().unwrap();
    let screenplay = tea_stall();

    let path = write_json(&screenplay, &dir.path().join("saved")).await.unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "চায়ের দোকানে বাকি_MasterScript.json"
    );
    let back: Screenplay = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(back, screenplay);
}

#[test]
fn test_serialize_failure_is_its_own_kind() {
    let err = ExportError::new(ExportErrorKind::Serialize("key must be a string".to_string()));
    let shown = err.to_string();
    assert!(shown.contains("serialize"), "{shown}");
    assert!(!shown.contains("I/O"));
}
