//! Null chat provider
//!
//! Stands in when no real provider is configured (e.g. missing API
//! key). Every completion request fails with a Chat error, so the
//! generation endpoint degrades to a 500 instead of the server refusing
//! to boot.

use anno_domain::error::{Error, Result};
use anno_domain::ports::ChatCompletionProvider;
use async_trait::async_trait;

/// Chat provider that rejects every request
#[derive(Debug, Default, Clone, Copy)]
pub struct NullChatProvider;

#[async_trait]
impl ChatCompletionProvider for NullChatProvider {
    async fn complete(&self, _system_prompt: &str, _user_prompt: &str) -> Result<String> {
        Err(Error::chat(
            "No chat completion provider configured; set an API key to enable generation",
        ))
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

#[cfg(test)]
mod tests {
    use super::NullChatProvider;
    use anno_domain::error::Error;
    use anno_domain::ports::ChatCompletionProvider;

    #[tokio::test]
    async fn null_provider_always_fails() {
        let provider = NullChatProvider;
        let result = provider.complete("system", "user").await;
        assert!(matches!(result, Err(Error::Chat { .. })));
    }
}
