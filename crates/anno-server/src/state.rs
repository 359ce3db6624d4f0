//! Shared handler state

use anno_application::{AnnotationService, GenerationService, LibraryService};
use std::sync::Arc;

/// Handler state containing the shared use case services
#[derive(Clone)]
pub struct AppState {
    /// Upload and fetch of documents and code files
    pub library: Arc<LibraryService>,
    /// Annotation lifecycle: create, fetch, save
    pub annotations: Arc<AnnotationService>,
    /// AI annotation generation
    pub generation: Arc<GenerationService>,
}
