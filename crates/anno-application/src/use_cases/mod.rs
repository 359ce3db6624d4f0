//! Use case services
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`LibraryService`] | Upload and fetch of documents and code files |
//! | [`AnnotationService`] | Annotation lifecycle: create, fetch, save to disk |
//! | [`GenerationService`] | AI-proposed annotations via chat completion |

/// Annotation lifecycle service
pub mod annotation_service;
/// AI annotation generation service
pub mod generation_service;
/// Document and code file library service
pub mod library_service;

pub use annotation_service::AnnotationService;
pub use generation_service::GenerationService;
pub use library_service::LibraryService;
