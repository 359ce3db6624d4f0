//! In-memory store implementations

/// DashMap-backed keyed stores
pub mod memory;

pub use memory::{InMemoryAnnotationStore, InMemoryCodeFileStore, InMemoryDocumentStore};
