//! Domain port interfaces
//!
//! Boundary contracts between the domain and the outer layers.
//! Infrastructure implements the store and persister ports; providers
//! implement the chat completion port.
//!
//! ## Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`DocumentStore`] | Keyed storage for uploaded documents |
//! | [`CodeFileStore`] | Keyed storage for uploaded code files |
//! | [`AnnotationStore`] | Keyed storage for annotation records |
//! | [`AnnotationPersister`] | JSON-on-disk persistence for saved annotations |
//! | [`ChatCompletionProvider`] | External LLM chat completion service |

/// Chat completion provider port
pub mod chat;
/// Annotation persistence port
pub mod persister;
/// In-memory store ports
pub mod stores;

// Re-export port traits for convenience
pub use chat::{ChatCompletionProvider, ChatProviderConfig};
pub use persister::AnnotationPersister;
pub use stores::{AnnotationStore, CodeFileStore, DocumentStore};
