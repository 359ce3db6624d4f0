//! Document and code file library service
//!
//! Upload handling for both record kinds: decode the payload as UTF-8,
//! mint an identifier, store the record. Documents and code files share
//! the logic but live in separate stores. There is no content-type or
//! size validation and no duplicate-filename handling.

use anno_domain::error::Result;
use anno_domain::ids::new_id;
use anno_domain::ports::{CodeFileStore, DocumentStore};
use anno_domain::{CodeFile, Document};
use std::sync::Arc;
use tracing::info;

/// Library of uploaded documents and code files
pub struct LibraryService {
    documents: Arc<dyn DocumentStore>,
    code_files: Arc<dyn CodeFileStore>,
}

impl LibraryService {
    /// Create a new library service with injected stores
    pub fn new(documents: Arc<dyn DocumentStore>, code_files: Arc<dyn CodeFileStore>) -> Self {
        Self {
            documents,
            code_files,
        }
    }

    /// Decode and store an uploaded document, returning the stored record
    pub async fn upload_document(&self, name: &str, payload: Vec<u8>) -> Result<Document> {
        let content = String::from_utf8(payload)?;
        let document = Document {
            id: new_id(),
            name: name.to_string(),
            content,
        };
        self.documents.insert(document.clone()).await?;
        info!(document_id = %document.id, name = %document.name, "stored uploaded document");
        Ok(document)
    }

    /// Decode and store an uploaded code file, returning the stored record
    pub async fn upload_code(&self, name: &str, payload: Vec<u8>) -> Result<CodeFile> {
        let content = String::from_utf8(payload)?;
        let code_file = CodeFile {
            id: new_id(),
            name: name.to_string(),
            content,
        };
        self.code_files.insert(code_file.clone()).await?;
        info!(code_id = %code_file.id, name = %code_file.name, "stored uploaded code file");
        Ok(code_file)
    }

    /// Fetch a document by identifier
    pub async fn document(&self, id: &str) -> Result<Document> {
        self.documents.get(id).await
    }

    /// Fetch a code file by identifier
    pub async fn code_file(&self, id: &str) -> Result<CodeFile> {
        self.code_files.get(id).await
    }
}
