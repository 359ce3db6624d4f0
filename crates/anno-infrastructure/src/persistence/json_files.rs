//! One-file-per-annotation JSON persister
//!
//! Writes each saved annotation as indented JSON to
//! `<dir>/annotation_<id>.json`, creating the directory on first use
//! and silently overwriting an existing file for the same identifier.
//! Disk faults are not caught here; they propagate to the caller.

use anno_domain::error::Result;
use anno_domain::ports::AnnotationPersister;
use anno_domain::Annotation;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Annotation persister writing one JSON file per annotation
pub struct JsonFilePersister {
    directory: PathBuf,
}

impl JsonFilePersister {
    /// Create a persister writing into `directory`
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    /// The file path used for an annotation identifier
    pub fn path_for(&self, id: &str) -> PathBuf {
        self.directory.join(format!("annotation_{id}.json"))
    }
}

#[async_trait]
impl AnnotationPersister for JsonFilePersister {
    async fn persist(&self, annotation: &Annotation) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.directory).await?;

        let path = self.path_for(&annotation.id);
        let json = serde_json::to_string_pretty(annotation)?;
        tokio::fs::write(&path, json).await?;

        debug!(path = %path.display(), "annotation written to disk");
        Ok(path)
    }
}
