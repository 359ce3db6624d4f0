//! Chat completion providers
//!
//! | Provider | Description |
//! |----------|-------------|
//! | [`OpenAiChatProvider`] | OpenAI-compatible chat completion API over HTTP |
//! | [`NullChatProvider`] | Always-failing fallback for unconfigured deployments |

/// Null chat provider
pub mod null;
/// OpenAI-compatible chat provider
pub mod openai;

pub use null::NullChatProvider;
pub use openai::OpenAiChatProvider;

use anno_domain::error::{Error, Result};
use anno_domain::ports::{ChatCompletionProvider, ChatProviderConfig};
use std::sync::Arc;
use std::time::Duration;

/// Build a chat completion provider from configuration.
///
/// Fails when the named provider is unknown or when the OpenAI provider
/// is selected without an API key.
pub fn create_chat_provider(config: &ChatProviderConfig) -> Result<Arc<dyn ChatCompletionProvider>> {
    match config.provider.as_str() {
        "openai" => {
            let api_key = config
                .api_key
                .clone()
                .ok_or_else(|| Error::configuration("OpenAI chat provider requires an API key"))?;
            let timeout = Duration::from_secs(config.timeout_secs);
            let http_client = reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| Error::chat(format!("Failed to create HTTP client: {e}")))?;

            Ok(Arc::new(OpenAiChatProvider::new(
                api_key,
                config.base_url.clone(),
                config.model.clone(),
                config.temperature,
                timeout,
                http_client,
            )))
        }
        "null" => Ok(Arc::new(NullChatProvider)),
        other => Err(Error::configuration(format!(
            "Unknown chat provider: {other}"
        ))),
    }
}
