//! Structured extraction port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::error::UnsupportedModelError;
use crate::domain::extraction::{QaExtraction, SystemPrompt, TokenUsage};

/// Structured extraction errors
#[derive(Debug, Clone, Error)]
pub enum ExtractorError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error(transparent)]
    UnsupportedModel(#[from] UnsupportedModelError),

    #[error("Model did not return structured output")]
    ExtractionFailed,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Port for schema-constrained LLM extraction.
///
/// Implementations perform a single call with no internal retries; retry
/// policy belongs to callers, with this trait as the seam for a retrying
/// decorator.
#[async_trait]
pub trait StructuredExtractor: Send + Sync {
    /// Extract a validated [`QaExtraction`] from the given messages.
    ///
    /// # Arguments
    /// * `prompt` - The system prompt with vacancy/language context
    /// * `user_message` - Resume and transcript text with section markers
    /// * `model` - User-facing model alias, resolved before any network call
    ///
    /// # Returns
    /// The schema-validated extraction plus normalized token usage
    async fn extract(
        &self,
        prompt: &SystemPrompt,
        user_message: &str,
        model: &str,
    ) -> Result<(QaExtraction, TokenUsage), ExtractorError>;
}
