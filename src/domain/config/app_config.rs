//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::language::Language;
use crate::domain::query::InputMode;
use crate::domain::recording::Duration;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub language: Option<String>,
    pub mode: Option<String>,
    pub speak: Option<bool>,
    pub duration: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            language: Some("english".to_string()),
            mode: Some("ingredients".to_string()),
            speak: Some(true),
            duration: Some("5s".to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            language: other.language.or(self.language),
            mode: other.mode.or(self.mode),
            speak: other.speak.or(self.speak),
            duration: other.duration.or(self.duration),
        }
    }

    /// Get language as parsed Language, or English if not set/invalid
    pub fn language_or_default(&self) -> Language {
        self.language
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get mode as parsed InputMode, or Ingredients if not set/invalid
    pub fn mode_or_default(&self) -> InputMode {
        self.mode
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get speak setting, or true if not set
    pub fn speak_or_default(&self) -> bool {
        self.speak.unwrap_or(true)
    }

    /// Get duration as parsed Duration, or the 5s listen default
    pub fn duration_or_default(&self) -> Duration {
        self.duration
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(Duration::default_listen)
    }
}
