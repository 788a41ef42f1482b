//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like the Gemini API, the Google
//! Translate TTS endpoint, cpal, and rodio.

pub mod config;
pub mod gemini;
pub mod net;
pub mod playback;
pub mod recording;
pub mod speech;

// Re-export adapters
pub use config::XdgConfigStore;
pub use gemini::{GeminiGenerator, GeminiTranscriber};
pub use playback::RodioPlayer;
pub use recording::CpalRecorder;
pub use speech::GoogleTranslateTts;
