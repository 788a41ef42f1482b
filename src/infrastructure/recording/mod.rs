//! Recording infrastructure module
//!
//! Cross-platform microphone capture using cpal, encoded to FLAC for the
//! Gemini speech-recognition call (lossless and explicitly supported).

mod cpal_recorder;
mod flac_encoder;

pub use cpal_recorder::CpalRecorder;
pub use flac_encoder::{encode_flac, FlacError, TARGET_SAMPLE_RATE};
