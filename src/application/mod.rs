//! Application layer - Use cases and port interfaces
//!
//! Contains the core pipeline operations and trait definitions
//! for external system interactions.

pub mod assist;
pub mod ports;
pub mod recipes;
pub mod resolve;
pub mod speak;

// Re-export use cases
pub use assist::{AssistUseCase, PresentInput, PresentOutput};
pub use recipes::{RecipeOutcome, RecipeService, SuggestionOutcome, Translation};
pub use resolve::{InputResolver, InputSource, ResolvedInput};
pub use speak::{SpeakError, SpeakOutcome, SpeakUseCase};
