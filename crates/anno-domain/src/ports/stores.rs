//! In-memory store ports
//!
//! Keyed storage contracts for the three record kinds. Implementations
//! must be safe to share across request tasks; there is no cross-request
//! transaction, so concurrent writers to the same key are last-write-wins.

use crate::entities::{Annotation, CodeFile, Document};
use crate::error::Result;
use async_trait::async_trait;

/// Keyed storage for uploaded documents
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Store a document under its identifier
    async fn insert(&self, document: Document) -> Result<()>;

    /// Fetch a document, failing with NotFound if the id is absent
    async fn get(&self, id: &str) -> Result<Document>;
}

/// Keyed storage for uploaded code files
#[async_trait]
pub trait CodeFileStore: Send + Sync {
    /// Store a code file under its identifier
    async fn insert(&self, code_file: CodeFile) -> Result<()>;

    /// Fetch a code file, failing with NotFound if the id is absent
    async fn get(&self, id: &str) -> Result<CodeFile>;
}

/// Keyed storage for annotation records
#[async_trait]
pub trait AnnotationStore: Send + Sync {
    /// Store an annotation under its identifier
    async fn insert(&self, annotation: Annotation) -> Result<()>;

    /// Fetch an annotation, failing with NotFound if the id is absent
    async fn get(&self, id: &str) -> Result<Annotation>;

    /// Overwrite an existing annotation.
    ///
    /// Fails with NotFound when `id` was never inserted; a create must
    /// precede any replace.
    async fn replace(&self, id: &str, annotation: Annotation) -> Result<()>;
}
