//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod generator;
pub mod player;
pub mod recorder;
pub mod synthesizer;
pub mod transcriber;

// Re-export common types
pub use config::ConfigStore;
pub use generator::{GenerationError, TextGenerator};
pub use player::{AudioPlayer, PlaybackError};
pub use recorder::{AudioRecorder, ProgressCallback, RecordingError};
pub use synthesizer::{SpeechSynthesizer, SynthesisError};
pub use transcriber::{Transcriber, TranscriptionError};
