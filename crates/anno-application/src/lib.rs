//! Application layer for the annotation backend
//!
//! Use case services orchestrating the domain ports. Each service is a
//! thin request/response unit: at most one store touched per call plus,
//! for generation, one external chat completion request.

/// Use case services
pub mod use_cases;

// Re-export services for convenience
pub use use_cases::{AnnotationService, GenerationService, LibraryService};
