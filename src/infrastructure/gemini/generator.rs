//! Gemini text-generation adapter

use async_trait::async_trait;

use crate::application::ports::{GenerationError, TextGenerator};

use super::{GeminiClient, GeminiError, Part};

/// Generative-text adapter backed by the Gemini API
pub struct GeminiGenerator {
    client: GeminiClient,
}

impl GeminiGenerator {
    /// Create a new generator with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: GeminiClient::new(api_key),
        }
    }

    /// Point at a custom base URL (tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.client = self.client.with_base_url(base_url);
        self
    }

    /// Use a custom model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.client = self.client.with_model(model);
        self
    }
}

impl From<GeminiError> for GenerationError {
    fn from(e: GeminiError) -> Self {
        match e {
            GeminiError::InvalidApiKey => Self::InvalidApiKey,
            GeminiError::RateLimited => Self::RateLimited,
            GeminiError::EmptyResponse => Self::EmptyResponse,
            GeminiError::Timeout => Self::RequestFailed("request timed out".to_string()),
            GeminiError::RequestFailed(msg) => Self::RequestFailed(msg),
            GeminiError::ParseError(msg) => Self::ParseError(msg),
            GeminiError::ApiError(msg) => Self::ApiError(msg),
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let text = self
            .client
            .generate(vec![Part::text(prompt)], None, None)
            .await?;
        Ok(text)
    }
}
