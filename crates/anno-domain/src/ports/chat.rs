//! Chat completion provider port
//!
//! Port for external LLM chat completion services. Providers make a
//! single non-streaming request per call; there is no retry and no
//! response validation beyond what the caller performs.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Default sampling temperature for annotation generation
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Chat provider configuration
///
/// Carried inside the application configuration and handed to the
/// provider factory. The API key is optional here because it may be
/// supplied through the process environment instead of the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatProviderConfig {
    /// Provider name (e.g. "openai", "null")
    pub provider: String,
    /// API key for the provider
    pub api_key: Option<String>,
    /// Optional custom base URL
    pub base_url: Option<String>,
    /// Model name
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ChatProviderConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            api_key: None,
            base_url: None,
            model: "gpt-3.5-turbo".to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// External LLM chat completion service
#[async_trait]
pub trait ChatCompletionProvider: Send + Sync {
    /// Send one chat completion request and return the assistant
    /// message content verbatim
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;

    /// Provider name for logging and diagnostics
    fn provider_name(&self) -> &str;
}
