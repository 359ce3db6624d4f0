//! Configuration loading and types

/// Configuration loader built on Figment
pub mod loader;
/// Configuration data types and defaults
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, ServerConfig, StorageConfig};
