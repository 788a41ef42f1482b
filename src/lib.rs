//! VoiceChef - voice-driven recipe assistant CLI
//!
//! This crate provides the core functionality for asking Google Gemini for
//! recipe suggestions by voice or text, translating the result, and speaking
//! it back through the system speakers.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core business logic, value objects, entities, and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Gemini, Google TTS, cpal, rodio, etc.)
//! - **CLI**: Command-line interface, argument parsing, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
