//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::language::Language;
use crate::domain::query::InputMode;
use crate::domain::recording::Duration;

/// VoiceChef - voice-driven recipe assistant
#[derive(Parser, Debug)]
#[command(name = "voice-chef")]
#[command(version = "1.0.0")]
#[command(about = "Voice-driven recipe assistant using Google Gemini")]
#[command(long_about = None)]
pub struct Cli {
    /// Ingredients or a recipe name (skips the microphone)
    #[arg(short = 't', long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Capture the query from the microphone
    #[arg(short = 'm', long)]
    pub mic: bool,

    /// Listen window for microphone capture (e.g. 5s; capped at 10s)
    #[arg(short = 'd', long, value_name = "TIME", requires = "mic")]
    pub duration: Option<String>,

    /// Output language for the recipe
    #[arg(short = 'l', long, value_name = "LANG")]
    pub language: Option<LanguageArg>,

    /// How to interpret the query
    #[arg(short = 'M', long, value_name = "MODE")]
    pub mode: Option<ModeArg>,

    /// Speak the recipe aloud
    #[arg(short = 's', long)]
    pub speak: bool,

    /// Do not speak the recipe aloud
    #[arg(long, conflicts_with = "speak")]
    pub no_speak: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Check the environment (API key, microphone, speakers, port)
    Doctor {
        /// Also check that this TCP port is free
        #[arg(long, value_name = "PORT")]
        port: Option<u16>,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Language argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LanguageArg {
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

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::English => Language::English,
            LanguageArg::Hindi => Language::Hindi,
            LanguageArg::Telugu => Language::Telugu,
            LanguageArg::Tamil => Language::Tamil,
            LanguageArg::Kannada => Language::Kannada,
            LanguageArg::French => Language::French,
            LanguageArg::Spanish => Language::Spanish,
            LanguageArg::German => Language::German,
            LanguageArg::Japanese => Language::Japanese,
            LanguageArg::Chinese => Language::Chinese,
            LanguageArg::Arabic => Language::Arabic,
        }
    }
}

/// Input mode argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Ingredients,
    Recipe,
}

impl From<ModeArg> for InputMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Ingredients => InputMode::Ingredients,
            ModeArg::Recipe => InputMode::RecipeName,
        }
    }
}

/// Parsed options for one assist run
#[derive(Debug, Clone)]
pub struct AssistOptions {
    pub text: Option<String>,
    pub use_mic: bool,
    pub duration: Duration,
    pub language: Language,
    pub mode: InputMode,
    pub speak: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["api_key", "language", "mode", "speak", "duration"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
