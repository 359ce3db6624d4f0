//! Annotation persistence port

use crate::entities::Annotation;
use crate::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Durable persistence for explicitly saved annotations.
///
/// One file per annotation, named from its identifier; persisting the
/// same identifier twice overwrites the previous file. I/O failures
/// propagate to the caller untouched.
#[async_trait]
pub trait AnnotationPersister: Send + Sync {
    /// Write the annotation to disk and return the path written
    async fn persist(&self, annotation: &Annotation) -> Result<PathBuf>;
}
