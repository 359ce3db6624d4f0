//! Unit tests for domain entities
//!
//! Pins the JSON wire shape of the annotation record, which is also the
//! on-disk format for saved annotations.

use anno_domain::{Annotation, AnnotationCategory, CodeFile, Document, Range};
use std::collections::BTreeMap;

fn sample_annotation() -> Annotation {
    let mut categories = BTreeMap::new();
    categories.insert(
        "initialization".to_string(),
        AnnotationCategory {
            name: "initialization".to_string(),
            document_ranges: vec![Range {
                start: 0,
                end: 24,
                content: "The parser is initialized".to_string(),
            }],
            code_ranges: vec![Range {
                start: 10,
                end: 42,
                content: "fn new() -> Parser".to_string(),
            }],
        },
    );
    Annotation {
        id: "a-1".to_string(),
        document_id: "d-1".to_string(),
        code_id: "c-1".to_string(),
        categories,
    }
}

#[test]
fn annotation_json_shape() {
    let annotation = sample_annotation();
    let value = serde_json::to_value(&annotation).unwrap();

    assert_eq!(value["id"], "a-1");
    assert_eq!(value["document_id"], "d-1");
    assert_eq!(value["code_id"], "c-1");
    let category = &value["categories"]["initialization"];
    assert_eq!(category["name"], "initialization");
    assert_eq!(category["document_ranges"][0]["start"], 0);
    assert_eq!(category["document_ranges"][0]["end"], 24);
    assert_eq!(category["code_ranges"][0]["content"], "fn new() -> Parser");
}

#[test]
fn annotation_roundtrips_through_json() {
    let annotation = sample_annotation();
    let json = serde_json::to_string(&annotation).unwrap();
    let parsed: Annotation = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, annotation);
}

#[test]
fn annotation_rejects_missing_fields() {
    let result: Result<Annotation, _> = serde_json::from_str(r#"{"id": "a-1"}"#);
    assert!(result.is_err());
}

#[test]
fn document_and_code_file_share_shape() {
    let document = Document {
        id: "d-1".to_string(),
        name: "guide.md".to_string(),
        content: "# Guide".to_string(),
    };
    let json = serde_json::to_string(&document).unwrap();
    // Same field names, so a document record parses as a code file record
    let code: CodeFile = serde_json::from_str(&json).unwrap();
    assert_eq!(code.id, document.id);
    assert_eq!(code.name, document.name);
    assert_eq!(code.content, document.content);
}
