//! Provider implementations for the annotation backend
//!
//! Concrete implementations of the domain's chat completion port plus
//! the factory that builds one from configuration.

/// Chat completion providers
pub mod chat;

pub use chat::{create_chat_provider, NullChatProvider, OpenAiChatProvider};
