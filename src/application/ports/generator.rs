//! Generative-text port interface

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the generative-text backend
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Empty model response")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Port for single-shot text generation.
///
/// One prompt in, one free-text answer out. No retry, no streaming; every
/// call is independent and stateless.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for the given prompt.
    ///
    /// Implementations must return [`GenerationError::EmptyResponse`] when
    /// the backend succeeds but yields nothing usable, so callers can treat
    /// degenerate responses identically to transport failures.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
