//! Mock provider implementations for testing.

use super::{GenerationParams, InlineMedia, ProviderError, VisionProvider};
use async_trait::async_trait;

/// Mock vision provider for testing.
pub struct MockVisionProvider {
    enabled: bool,
    reply: Option<String>,
}

impl MockVisionProvider {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            reply: None,
        }
    }

    /// Enabled provider that answers every request with a canned reply.
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            enabled: true,
            reply: Some(reply.into()),
        }
    }
}

#[async_trait]
impl VisionProvider for MockVisionProvider {
    async fn generate(
        &self,
        prompt: &str,
        media: &InlineMedia,
        _params: &GenerationParams,
    ) -> Result<String, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NotConfigured(
                "Mock vision provider not enabled".to_string(),
            ));
        }

        // Simulate upstream latency
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Ok(self.reply.clone().unwrap_or_else(|| {
            format!(
                "Mock response for: {} ({} bytes of {})",
                prompt.lines().next().unwrap_or_default(),
                media.data.len(),
                media.mime_type
            )
        }))
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.enabled {
            Ok(())
        } else {
            Err(ProviderError::NotConfigured(
                "Mock vision provider not enabled".to_string(),
            ))
        }
    }
}
