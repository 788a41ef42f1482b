//! Recipe service client over the generative-text port
//!
//! Three single-try operations: suggest recipe names from ingredients, fetch
//! a full recipe document, translate a recipe into a target language. Every
//! failure degrades to a safe default and is carried in the outcome so the
//! caller can warn the user; nothing here raises past the client boundary.

use crate::domain::language::Language;
use crate::domain::recipe::{self, MAX_SUGGESTIONS};

use super::ports::{GenerationError, TextGenerator};

/// Outcome of a suggestion request. `names` is empty whenever the backend
/// failed or returned nothing usable; the failure is carried alongside.
#[derive(Debug, Default)]
pub struct SuggestionOutcome {
    pub names: Vec<String>,
    pub failure: Option<GenerationError>,
}

/// Outcome of a recipe fetch. `text` is empty on failure.
#[derive(Debug, Default)]
pub struct RecipeOutcome {
    pub text: String,
    pub failure: Option<GenerationError>,
}

/// Outcome of a translation. Fail-open: on any failure `text` equals the
/// input exactly and `fell_back` is true, so the user still sees output.
#[derive(Debug)]
pub struct Translation {
    pub text: String,
    pub fell_back: bool,
    pub failure: Option<GenerationError>,
}

/// Recipe service over a generative-text port
pub struct RecipeService<G: TextGenerator> {
    generator: G,
}

impl<G: TextGenerator> RecipeService<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Suggest up to three recipe names for the given ingredients.
    ///
    /// The backend is asked for a comma-separated list; the response is
    /// split on commas, trimmed, empties dropped, and capped at three even
    /// if the model over-answers.
    pub async fn suggest_names(&self, ingredients: &str) -> SuggestionOutcome {
        let prompt = recipe::suggest_prompt(ingredients);

        match self.generator.generate(&prompt).await {
            Ok(response) => {
                let names: Vec<String> = response
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .take(MAX_SUGGESTIONS)
                    .map(str::to_string)
                    .collect();

                if names.is_empty() {
                    SuggestionOutcome {
                        names,
                        failure: Some(GenerationError::EmptyResponse),
                    }
                } else {
                    SuggestionOutcome {
                        names,
                        failure: None,
                    }
                }
            }
            Err(e) => SuggestionOutcome {
                names: Vec::new(),
                failure: Some(e),
            },
        }
    }

    /// Fetch a full recipe document for the given name.
    /// Returns trimmed text, or an empty string carrying the failure.
    pub async fn fetch_recipe(&self, recipe_name: &str) -> RecipeOutcome {
        let prompt = recipe::recipe_prompt(recipe_name);

        match self.generator.generate(&prompt).await {
            Ok(response) => {
                let text = response.trim().to_string();
                if text.is_empty() {
                    RecipeOutcome {
                        text,
                        failure: Some(GenerationError::EmptyResponse),
                    }
                } else {
                    RecipeOutcome {
                        text,
                        failure: None,
                    }
                }
            }
            Err(e) => RecipeOutcome {
                text: String::new(),
                failure: Some(e),
            },
        }
    }

    /// Translate recipe text into the target language.
    ///
    /// Fail-open: on any failure (or an empty response) the original text
    /// is returned unchanged so the user is never blocked from seeing the
    /// English result.
    pub async fn translate(&self, text: &str, language: Language) -> Translation {
        let prompt = recipe::translate_prompt(text, language);

        match self.generator.generate(&prompt).await {
            Ok(response) => {
                let translated = response.trim().to_string();
                if translated.is_empty() {
                    Translation {
                        text: text.to_string(),
                        fell_back: true,
                        failure: Some(GenerationError::EmptyResponse),
                    }
                } else {
                    Translation {
                        text: translated,
                        fell_back: false,
                        failure: None,
                    }
                }
            }
            Err(e) => Translation {
                text: text.to_string(),
                fell_back: true,
                failure: Some(e),
            },
        }
    }
}
