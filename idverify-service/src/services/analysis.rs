//! ID-document extraction and liveness assessment operations.
//!
//! Each operation wraps exactly one upstream generation call: a fixed prompt,
//! the uploaded media, and the service-wide generation settings.

use super::providers::{GenerationParams, InlineMedia, ProviderError, VisionProvider};
use std::sync::Arc;

/// Prompt for the ID extraction operation.
const ID_EXTRACTION_PROMPT: &str = "\
Carefully extract all readable information from this ID document.
Provide details in a structured format including:
- Full Name
- ID Number
- Date of Birth
- Address
- Issue Date
- Expiration Date

If any information is not visible or readable, state 'Not Available'.";

/// Prompt for the liveness assessment operation.
const LIVENESS_PROMPT: &str = "\
Analyze this video to determine if it represents a live human presence.
Look for key indicators of liveness:
- Natural head movement
- Blinking
- Facial expression changes
- No signs of static image or pre-recorded video

Provide a clear assessment:
- Is this a live person?
- Any suspicious elements detected?";

/// Generation settings shared by both operations: long free-text output with
/// every safety filter switched off.
fn generation_params() -> GenerationParams {
    GenerationParams {
        temperature: Some(1.0),
        top_p: Some(0.95),
        max_output_tokens: Some(8192),
        disable_safety_filters: true,
    }
}

/// Runs the analysis operations against the configured vision provider.
pub struct Analyzer {
    provider: Arc<dyn VisionProvider>,
}

impl Analyzer {
    pub fn new(provider: Arc<dyn VisionProvider>) -> Self {
        Self { provider }
    }

    /// Extract ID document fields from an uploaded image.
    pub async fn extract_id_fields(&self, media: InlineMedia) -> Result<String, ProviderError> {
        self.provider
            .generate(ID_EXTRACTION_PROMPT, &media, &generation_params())
            .await
    }

    /// Assess whether an uploaded video shows a live human.
    pub async fn assess_liveness(&self, media: InlineMedia) -> Result<String, ProviderError> {
        self.provider
            .generate(LIVENESS_PROMPT, &media, &generation_params())
            .await
    }

    pub async fn health_check(&self) -> Result<(), ProviderError> {
        self.provider.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::mock::MockVisionProvider;

    #[test]
    fn generation_params_pin_the_sampling_settings() {
        let params = generation_params();
        assert_eq!(params.temperature, Some(1.0));
        assert_eq!(params.top_p, Some(0.95));
        assert_eq!(params.max_output_tokens, Some(8192));
        assert!(params.disable_safety_filters);
    }

    #[tokio::test]
    async fn operations_relay_the_provider_reply_verbatim() {
        let analyzer = Analyzer::new(Arc::new(MockVisionProvider::with_reply(
            "Full Name: Not Available",
        )));

        let media = InlineMedia::new("image/png", b"\x89PNG".to_vec());
        let text = analyzer.extract_id_fields(media).await.unwrap();
        assert_eq!(text, "Full Name: Not Available");
    }

    #[tokio::test]
    async fn disabled_provider_surfaces_the_error() {
        let analyzer = Analyzer::new(Arc::new(MockVisionProvider::new(false)));

        let media = InlineMedia::new("video/mp4", vec![0u8; 16]);
        let err = analyzer.assess_liveness(media).await.unwrap_err();
        assert!(matches!(err, ProviderError::NotConfigured(_)));
    }
}
