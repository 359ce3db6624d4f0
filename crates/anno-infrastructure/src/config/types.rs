//! Configuration data types and defaults
//!
//! Defaults match the backend's conventional local setup: port 8000,
//! a single allowed browser origin on port 3000, and annotations saved
//! under `saved_annotations/` in the working directory.

use anno_domain::ports::ChatProviderConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// On-disk storage configuration
    pub storage: StorageConfig,
    /// Chat completion provider configuration
    pub llm: ChatProviderConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// The single origin allowed to make cross-origin requests
    pub cors_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            cors_origin: "http://localhost:3000".to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, or error
    pub level: String,
    /// Emit JSON-formatted log lines instead of plain text
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

/// On-disk storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory where saved annotations are written as JSON files
    pub annotations_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            annotations_dir: PathBuf::from("saved_annotations"),
        }
    }
}
