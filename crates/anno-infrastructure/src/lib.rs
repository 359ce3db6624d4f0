//! Infrastructure layer for the annotation backend
//!
//! Cross-cutting concerns and the concrete implementations of the
//! domain's store and persister ports: configuration loading, logging
//! initialization, in-memory keyed storage, and JSON-on-disk
//! persistence for saved annotations.

/// Configuration loading and types
pub mod config;
/// Structured logging with tracing
pub mod logging;
/// JSON file persistence for annotations
pub mod persistence;
/// In-memory store implementations
pub mod stores;

pub use config::{AppConfig, ConfigLoader};
pub use persistence::JsonFilePersister;
pub use stores::{InMemoryAnnotationStore, InMemoryCodeFileStore, InMemoryDocumentStore};
