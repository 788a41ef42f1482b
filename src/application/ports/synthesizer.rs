//! Speech-synthesis port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::audio::AudioData;

/// Errors from the speech-synthesis backend
#[derive(Debug, Clone, Error)]
pub enum SynthesisError {
    #[error("Synthesis request failed: {0}")]
    RequestFailed(String),

    #[error("Synthesis backend returned no audio")]
    EmptyAudio,

    #[error("Synthesis API error: {0}")]
    ApiError(String),
}

/// Port for text-to-speech synthesis.
///
/// Callers are responsible for cleaning the text and for resolving the
/// language code against the synthesis allow-list before calling in.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize speech audio for the given text and locale code.
    async fn synthesize(&self, text: &str, language_code: &str)
        -> Result<AudioData, SynthesisError>;
}
