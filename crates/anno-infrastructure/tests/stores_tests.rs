//! Unit tests for the in-memory stores

use anno_domain::error::Error;
use anno_domain::ports::{AnnotationStore, CodeFileStore, DocumentStore};
use anno_domain::{Annotation, CodeFile, Document};
use anno_infrastructure::{InMemoryAnnotationStore, InMemoryCodeFileStore, InMemoryDocumentStore};
use std::collections::BTreeMap;

fn document(id: &str) -> Document {
    Document {
        id: id.to_string(),
        name: "guide.md".to_string(),
        content: "contents".to_string(),
    }
}

fn annotation(id: &str) -> Annotation {
    Annotation {
        id: id.to_string(),
        document_id: "d".to_string(),
        code_id: "c".to_string(),
        categories: BTreeMap::new(),
    }
}

#[tokio::test]
async fn document_store_roundtrip() {
    let store = InMemoryDocumentStore::new();
    store.insert(document("d-1")).await.unwrap();

    let fetched = store.get("d-1").await.unwrap();
    assert_eq!(fetched, document("d-1"));
}

#[tokio::test]
async fn missing_document_is_not_found() {
    let store = InMemoryDocumentStore::new();
    let error = store.get("nope").await.unwrap_err();
    match error {
        Error::NotFound { resource } => assert_eq!(resource, "document nope"),
        other => panic!("Expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn code_file_store_roundtrip() {
    let store = InMemoryCodeFileStore::new();
    store
        .insert(CodeFile {
            id: "c-1".to_string(),
            name: "main.rs".to_string(),
            content: "fn main() {}".to_string(),
        })
        .await
        .unwrap();

    let fetched = store.get("c-1").await.unwrap();
    assert_eq!(fetched.name, "main.rs");

    let error = store.get("c-2").await.unwrap_err();
    assert!(matches!(error, Error::NotFound { .. }));
}

#[tokio::test]
async fn annotation_replace_requires_existing_id() {
    let store = InMemoryAnnotationStore::new();

    let error = store.replace("a-1", annotation("a-1")).await.unwrap_err();
    assert!(matches!(error, Error::NotFound { .. }));

    store.insert(annotation("a-1")).await.unwrap();
    let mut updated = annotation("a-1");
    updated.document_id = "d-2".to_string();
    store.replace("a-1", updated).await.unwrap();

    let fetched = store.get("a-1").await.unwrap();
    assert_eq!(fetched.document_id, "d-2");
}

#[tokio::test]
async fn insert_overwrites_same_id() {
    let store = InMemoryDocumentStore::new();
    store.insert(document("d-1")).await.unwrap();

    let mut newer = document("d-1");
    newer.content = "updated".to_string();
    store.insert(newer).await.unwrap();

    assert_eq!(store.get("d-1").await.unwrap().content, "updated");
}
