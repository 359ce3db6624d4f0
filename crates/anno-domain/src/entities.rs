//! Domain entities
//!
//! The record types exchanged over the API and held in the stores.
//! Uploaded content is stored verbatim and never re-encoded.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A labeled span within a document or code file.
///
/// Offsets are byte positions supplied by the client (or the model) and
/// are not validated against the length of the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    /// Start offset of the span
    pub start: usize,
    /// End offset of the span
    pub end: usize,
    /// The literal text the span denotes
    pub content: String,
}

/// A named grouping of document/code range correspondences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationCategory {
    /// Semantic label for this group of correspondences
    pub name: String,
    /// Spans in the document, in submission order
    pub document_ranges: Vec<Range>,
    /// Spans in the code file, in submission order
    pub code_ranges: Vec<Range>,
}

/// The full correspondence record between one document and one code file.
///
/// `document_id` and `code_id` are expected to resolve in their stores,
/// but this is only checked when an annotation is generated, never when
/// one is saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Store identifier of this annotation
    pub id: String,
    /// Identifier of the annotated document
    pub document_id: String,
    /// Identifier of the annotated code file
    pub code_id: String,
    /// Correspondences grouped by category name
    pub categories: BTreeMap<String, AnnotationCategory>,
}

/// An uploaded document: raw decoded text plus its declared filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Store identifier of this document
    pub id: String,
    /// Filename declared at upload time
    pub name: String,
    /// Decoded text content, stored verbatim
    pub content: String,
}

/// An uploaded code file.
///
/// Same shape as [`Document`]; the two live in separate stores and are
/// kept as distinct types so an annotation cannot mix them up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeFile {
    /// Store identifier of this code file
    pub id: String,
    /// Filename declared at upload time
    pub name: String,
    /// Decoded text content, stored verbatim
    pub content: String,
}
