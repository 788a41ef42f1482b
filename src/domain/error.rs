//! Domain error types

use thiserror::Error;

/// Error when parsing a duration string
#[derive(Debug, Clone, Error)]
#[error("Invalid duration format: \"{input}\". Expected format: <number>s, <number>m, or <number>m<number>s (e.g., 5s, 10s, 1m)")]
pub struct DurationParseError {
    pub input: String,
}

/// Error when an unknown language name is provided
#[derive(Debug, Clone, Error)]
#[error("Unknown language: \"{input}\". Valid languages are: english, hindi, telugu, tamil, kannada, french, spanish, german, japanese, chinese, arabic")]
pub struct InvalidLanguageError {
    pub input: String,
}

/// Error when an unknown input mode is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid input mode: \"{input}\". Valid modes are: ingredients, recipe")]
pub struct InvalidModeError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
