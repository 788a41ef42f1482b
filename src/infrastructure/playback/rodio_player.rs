//! Rodio-based audio playback adapter
//!
//! Plays synthesized MP3 speech straight from memory. The bytes never touch
//! disk, and they are dropped when playback completes on every exit path.

use std::io::Cursor;

use async_trait::async_trait;
use rodio::{Decoder, OutputStream, Sink};

use crate::application::ports::{AudioPlayer, PlaybackError};
use crate::domain::audio::AudioData;

/// Audio player implementation using rodio
pub struct RodioPlayer;

impl RodioPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RodioPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioPlayer for RodioPlayer {
    async fn play(&self, audio: &AudioData) -> Result<(), PlaybackError> {
        let bytes = audio.data().to_vec();

        // Playback blocks until the sink drains, keep it off the async runtime
        tokio::task::spawn_blocking(move || play_sync(bytes))
            .await
            .map_err(|e| PlaybackError::PlaybackFailed(format!("Task join error: {}", e)))?
    }
}

/// Play audio bytes synchronously (called from spawn_blocking)
fn play_sync(bytes: Vec<u8>) -> Result<(), PlaybackError> {
    let (_stream, stream_handle) = OutputStream::try_default()
        .map_err(|e| PlaybackError::DeviceNotAvailable(e.to_string()))?;

    let sink =
        Sink::try_new(&stream_handle).map_err(|e| PlaybackError::PlaybackFailed(e.to_string()))?;

    let source =
        Decoder::new(Cursor::new(bytes)).map_err(|e| PlaybackError::DecodeFailed(e.to_string()))?;

    sink.append(source);

    // Wait for playback to complete before releasing the stream
    sink.sleep_until_end();

    Ok(())
}
