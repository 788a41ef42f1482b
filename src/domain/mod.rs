//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod audio;
pub mod config;
pub mod error;
pub mod language;
pub mod query;
pub mod recipe;
pub mod recording;
pub mod session;

// Re-export common types
pub use audio::{AudioData, AudioMimeType};
pub use config::AppConfig;
pub use error::*;
pub use language::Language;
pub use query::{InputMode, Query};
pub use recording::Duration;
pub use session::SessionState;
