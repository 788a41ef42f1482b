//! Gemini audio-transcription adapter

use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{Transcriber, TranscriptionError};
use crate::domain::audio::AudioData;
use crate::domain::recipe::transcribe_instruction;

use super::{GeminiClient, GeminiError, Part};

/// Deadline for one recognition round-trip
const TRANSCRIBE_TIMEOUT: Duration = Duration::from_secs(15);

/// Speech-recognition adapter backed by the Gemini API with inline audio
pub struct GeminiTranscriber {
    client: GeminiClient,
}

impl GeminiTranscriber {
    /// Create a new transcriber with the given API key
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
}

impl From<GeminiError> for TranscriptionError {
    fn from(e: GeminiError) -> Self {
        match e {
            GeminiError::InvalidApiKey => Self::InvalidApiKey,
            GeminiError::RateLimited => Self::RateLimited,
            GeminiError::Timeout => Self::Timeout,
            // The model answered but heard nothing usable
            GeminiError::EmptyResponse => Self::Unintelligible,
            GeminiError::RequestFailed(msg)
            | GeminiError::ParseError(msg)
            | GeminiError::ApiError(msg) => Self::ServiceError(msg),
        }
    }
}

#[async_trait]
impl Transcriber for GeminiTranscriber {
    async fn transcribe(&self, audio: &AudioData) -> Result<String, TranscriptionError> {
        let part = Part::inline_data(audio.mime_type().as_str(), audio.to_base64());

        let text = self
            .client
            .generate(
                vec![part],
                Some(transcribe_instruction()),
                Some(TRANSCRIBE_TIMEOUT),
            )
            .await?;

        Ok(text)
    }
}
