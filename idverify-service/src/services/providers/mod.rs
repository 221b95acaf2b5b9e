//! Vision provider abstractions and implementations.
//!
//! This module provides a trait-based abstraction for multimodal generation
//! backends, allowing easy swapping between Gemini and mock implementations.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered")]
    ContentFiltered,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Media payload submitted alongside a prompt.
#[derive(Debug, Clone)]
pub struct InlineMedia {
    /// MIME type as declared by the uploader.
    pub mime_type: String,
    /// Raw bytes; the provider encodes them for the wire.
    pub data: Vec<u8>,
}

impl InlineMedia {
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data,
        }
    }
}

/// Generation parameters for vision requests.
#[derive(Debug, Clone, Default)]
pub struct GenerationParams {
    /// Sampling temperature.
    pub temperature: Option<f32>,

    /// Nucleus sampling top-p.
    pub top_p: Option<f32>,

    /// Maximum output tokens.
    pub max_output_tokens: Option<i32>,

    /// Send an explicit OFF threshold for every harm category.
    pub disable_safety_filters: bool,
}

/// Trait for prompt-plus-media generation providers (e.g. Gemini).
#[async_trait]
pub trait VisionProvider: Send + Sync {
    /// Generate a text response for the prompt and attached media.
    async fn generate(
        &self,
        prompt: &str,
        media: &InlineMedia,
        params: &GenerationParams,
    ) -> Result<String, ProviderError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
