//! Domain layer for the annotation backend
//!
//! Core types shared by every other layer: the entities that model
//! document/code annotations, the error type, identifier generation,
//! and the port traits implemented by infrastructure and providers.
//!
//! ## Architecture
//!
//! Ports follow the Dependency Inversion Principle: the domain defines
//! the contracts, outer layers implement them.

/// Domain entities: documents, code files, and annotations
pub mod entities;
/// Error handling types
pub mod error;
/// Identifier generation
pub mod ids;
/// Boundary contracts implemented by infrastructure and providers
pub mod ports;

// Re-export commonly used types
pub use entities::{Annotation, AnnotationCategory, CodeFile, Document, Range};
pub use error::{Error, Result};
