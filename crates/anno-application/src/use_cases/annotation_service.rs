//! Annotation lifecycle service
//!
//! Create, fetch, and save of annotation records. `create` always
//! succeeds and mints a fresh identifier; `save` requires the identifier
//! to exist already, so a create must precede any save. Only `save`
//! touches the persister; created-but-unsaved annotations are lost on
//! process restart.

use anno_domain::error::Result;
use anno_domain::ids::new_id;
use anno_domain::ports::{AnnotationPersister, AnnotationStore};
use anno_domain::Annotation;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// Annotation lifecycle service
pub struct AnnotationService {
    annotations: Arc<dyn AnnotationStore>,
    persister: Arc<dyn AnnotationPersister>,
}

impl AnnotationService {
    /// Create a new annotation service with injected store and persister
    pub fn new(annotations: Arc<dyn AnnotationStore>, persister: Arc<dyn AnnotationPersister>) -> Self {
        Self {
            annotations,
            persister,
        }
    }

    /// Store a submitted annotation under a fresh identifier.
    ///
    /// Whatever id the client sent is discarded; the stored record and
    /// the returned record both carry the minted one.
    pub async fn create(&self, mut annotation: Annotation) -> Result<Annotation> {
        annotation.id = new_id();
        self.annotations.insert(annotation.clone()).await?;
        debug!(annotation_id = %annotation.id, "created annotation");
        Ok(annotation)
    }

    /// Fetch an annotation by identifier
    pub async fn get(&self, id: &str) -> Result<Annotation> {
        self.annotations.get(id).await
    }

    /// Overwrite an existing annotation and persist it to disk.
    ///
    /// Fails with NotFound when `id` was never created, regardless of
    /// payload validity. The submitted record's id field is forced to
    /// the path identifier before storing. Persister faults propagate.
    pub async fn save(&self, id: &str, mut annotation: Annotation) -> Result<PathBuf> {
        annotation.id = id.to_string();
        self.annotations.replace(id, annotation.clone()).await?;
        let path = self.persister.persist(&annotation).await?;
        info!(annotation_id = %id, path = %path.display(), "annotation saved");
        Ok(path)
    }
}
