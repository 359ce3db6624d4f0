//! OpenAI-compatible chat provider
//!
//! Implements the ChatCompletionProvider port against the OpenAI chat
//! completions API (or any endpoint speaking the same protocol via a
//! custom base URL). One non-streaming request per call, no retry.

use std::time::Duration;

use anno_domain::error::{Error, Result};
use anno_domain::ports::ChatCompletionProvider;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// Default OpenAI API base URL
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Typed view of the chat completion response.
///
/// Only the fields this backend consumes; everything else the API
/// returns is ignored.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: String,
}

/// OpenAI-compatible chat completion provider
///
/// Receives the HTTP client via constructor injection so callers control
/// connection pooling and default timeouts.
pub struct OpenAiChatProvider {
    api_key: String,
    base_url: Option<String>,
    model: String,
    temperature: f32,
    timeout: Duration,
    http_client: Client,
}

impl OpenAiChatProvider {
    /// Create a new OpenAI chat provider
    ///
    /// # Arguments
    /// * `api_key` - API key sent as a bearer token
    /// * `base_url` - Optional custom base URL (defaults to the OpenAI API)
    /// * `model` - Model name (e.g. "gpt-3.5-turbo")
    /// * `temperature` - Sampling temperature for every request
    /// * `timeout` - Per-request timeout
    /// * `http_client` - Reqwest client used for API requests
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: String,
        temperature: f32,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            api_key,
            base_url,
            model,
            temperature,
            timeout,
            http_client,
        }
    }

    /// Get the base URL for this provider
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Get the model name
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ChatCompletionProvider for OpenAiChatProvider {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let payload = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_prompt },
            ],
            "temperature": self.temperature,
        });

        debug!(model = %self.model, "sending chat completion request");
        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url()))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::chat(format!("Request timed out after {:?}", self.timeout))
                } else {
                    Error::chat(format!("HTTP request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::chat(format!(
                "Chat completion API returned {status}: {body}"
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| Error::chat(format!("Invalid completion response: {e}")))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::chat("Completion response contained no choices"))
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}
