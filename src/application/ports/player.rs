//! Audio playback port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::audio::AudioData;

/// Errors that can occur during audio playback
#[derive(Debug, Clone, Error)]
pub enum PlaybackError {
    #[error("Audio device not available: {0}")]
    DeviceNotAvailable(String),

    #[error("Failed to decode audio: {0}")]
    DecodeFailed(String),

    #[error("Playback failed: {0}")]
    PlaybackFailed(String),
}

/// Port for playing synthesized speech.
///
/// `play` returns only after playback completes, so the audio bytes can be
/// dropped immediately afterwards on every exit path.
#[async_trait]
pub trait AudioPlayer: Send + Sync {
    /// Play audio to completion
    async fn play(&self, audio: &AudioData) -> Result<(), PlaybackError>;
}
