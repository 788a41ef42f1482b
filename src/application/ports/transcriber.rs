//! Speech-recognition port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::audio::AudioData;

/// Transcription failure signals
#[derive(Debug, Clone, Error)]
pub enum TranscriptionError {
    /// Audio was received but no speech could be understood
    #[error("Could not understand the audio")]
    Unintelligible,

    /// Network or API failure
    #[error("Speech service error: {0}")]
    ServiceError(String),

    /// The recognition call exceeded its deadline
    #[error("Speech service timed out")]
    Timeout,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,
}

/// Port for audio transcription
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe captured audio to text.
    ///
    /// # Returns
    /// The best-guess transcript, or one of the failure signals above.
    async fn transcribe(&self, audio: &AudioData) -> Result<String, TranscriptionError>;
}
