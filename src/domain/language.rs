//! Supported language value object
//!
//! A fixed table of the languages the assistant can translate into,
//! mapping human-readable names to locale codes. Speech synthesis supports
//! a subset of these codes; the rest fall back to English at speak time.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidLanguageError;

/// All supported languages, in selection order
pub const ALL_LANGUAGES: &[Language] = &[
    Language::English,
    Language::Hindi,
    Language::Telugu,
    Language::Tamil,
    Language::Kannada,
    Language::French,
    Language::Spanish,
    Language::German,
    Language::Japanese,
    Language::Chinese,
    Language::Arabic,
];

/// Locale codes known to be accepted by the speech-synthesis backend.
/// Telugu and Kannada are valid translation targets but are not in this
/// list, so spoken output for them falls back to English.
pub const SYNTHESIS_CODES: &[&str] = &["en", "hi", "ta", "fr", "es", "de", "ja", "zh", "ar"];

/// Languages the assistant can translate recipes into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Telugu,
    Tamil,
    Kannada,
    French,
    Spanish,
    German,
    Japanese,
    Chinese,
    Arabic,
}

impl Language {
    /// Human-readable name, used in translation prompts and selection lists
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Hindi => "hindi",
            Self::Telugu => "telugu",
            Self::Tamil => "tamil",
            Self::Kannada => "kannada",
            Self::French => "french",
            Self::Spanish => "spanish",
            Self::German => "german",
            Self::Japanese => "japanese",
            Self::Chinese => "chinese",
            Self::Arabic => "arabic",
        }
    }

    /// Locale code, used for speech synthesis
    pub const fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::Telugu => "te",
            Self::Tamil => "ta",
            Self::Kannada => "kn",
            Self::French => "fr",
            Self::Spanish => "es",
            Self::German => "de",
            Self::Japanese => "ja",
            Self::Chinese => "zh",
            Self::Arabic => "ar",
        }
    }

    /// Whether the synthesis backend supports this language's code
    pub fn synthesis_supported(&self) -> bool {
        SYNTHESIS_CODES.contains(&self.code())
    }

    /// Whether translation is needed at all (English output is the raw result)
    pub fn is_english(&self) -> bool {
        matches!(self, Self::English)
    }
}

impl FromStr for Language {
    type Err = InvalidLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Self::English),
            "hindi" | "hi" => Ok(Self::Hindi),
            "telugu" | "te" => Ok(Self::Telugu),
            "tamil" | "ta" => Ok(Self::Tamil),
            "kannada" | "kn" => Ok(Self::Kannada),
            "french" | "fr" => Ok(Self::French),
            "spanish" | "es" => Ok(Self::Spanish),
            "german" | "de" => Ok(Self::German),
            "japanese" | "ja" => Ok(Self::Japanese),
            "chinese" | "zh" => Ok(Self::Chinese),
            "arabic" | "ar" => Ok(Self::Arabic),
            _ => Err(InvalidLanguageError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
