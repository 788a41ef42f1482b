//! Recipe presentation use case
//!
//! Drives one full interaction: suggest names from a query, then fetch a
//! chosen recipe, translate it when a non-English language is selected, and
//! speak the result. Every external failure degrades to a safe default and is
//! carried in the output so the caller can show a warning; nothing is fatal.

use crate::domain::language::Language;
use crate::domain::query::Query;

use super::ports::{AudioPlayer, GenerationError, SpeechSynthesizer, TextGenerator};
use super::recipes::{RecipeService, SuggestionOutcome};
use super::speak::{SpeakError, SpeakOutcome, SpeakUseCase};

/// Input for presenting one recipe
#[derive(Debug, Clone)]
pub struct PresentInput {
    /// Recipe name to fetch
    pub recipe_name: String,
    /// Output language; non-English triggers translation
    pub language: Language,
    /// Whether to speak the result aloud
    pub speak: bool,
}

/// Output of one presentation
#[derive(Debug)]
pub struct PresentOutput {
    /// Final recipe text (translated when requested), empty on fetch failure
    pub recipe_text: String,
    /// Fetch failure to surface, if any
    pub fetch_failure: Option<GenerationError>,
    /// True when translation was requested but the English text was kept
    pub translation_fell_back: bool,
    /// Speech result when speaking was attempted
    pub speech: Option<Result<SpeakOutcome, SpeakError>>,
}

/// Full pipeline use case over the recipe, synthesis, and playback ports
pub struct AssistUseCase<G, S, P>
where
    G: TextGenerator,
    S: SpeechSynthesizer,
    P: AudioPlayer,
{
    recipes: RecipeService<G>,
    speaker: SpeakUseCase<S, P>,
}

impl<G, S, P> AssistUseCase<G, S, P>
where
    G: TextGenerator,
    S: SpeechSynthesizer,
    P: AudioPlayer,
{
    pub fn new(generator: G, synthesizer: S, player: P) -> Self {
        Self {
            recipes: RecipeService::new(generator),
            speaker: SpeakUseCase::new(synthesizer, player),
        }
    }

    /// Suggest recipe names for an ingredient query.
    /// An empty query yields an empty outcome without calling the backend.
    pub async fn suggest(&self, query: &Query) -> SuggestionOutcome {
        if query.is_empty() {
            return SuggestionOutcome::default();
        }
        self.recipes.suggest_names(query.as_str()).await
    }

    /// Fetch, optionally translate, and optionally speak one recipe.
    pub async fn present(&self, input: PresentInput) -> PresentOutput {
        let fetched = self.recipes.fetch_recipe(&input.recipe_name).await;
        if fetched.text.is_empty() {
            return PresentOutput {
                recipe_text: String::new(),
                fetch_failure: fetched.failure,
                translation_fell_back: false,
                speech: None,
            };
        }

        let (recipe_text, translation_fell_back) = if input.language.is_english() {
            (fetched.text, false)
        } else {
            let translation = self.recipes.translate(&fetched.text, input.language).await;
            (translation.text, translation.fell_back)
        };

        let speech = if input.speak {
            Some(self.speaker.speak(&recipe_text, input.language).await)
        } else {
            None
        };

        PresentOutput {
            recipe_text,
            fetch_failure: None,
            translation_fell_back,
            speech,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{PlaybackError, SynthesisError};
    use crate::domain::audio::{AudioData, AudioMimeType};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Generator that answers suggest, fetch, and translate prompts in order
    struct ScriptedGenerator {
        responses: Mutex<Vec<Result<String, GenerationError>>>,
    }

    impl ScriptedGenerator {
        fn new(responses: Vec<Result<String, GenerationError>>) -> Self {
            Self {
                responses: Mutex::new(responses),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
            self.responses.lock().unwrap().remove(0)
        }
    }

    struct MockSynthesizer;

    #[async_trait]
    impl SpeechSynthesizer for MockSynthesizer {
        async fn synthesize(
            &self,
            _text: &str,
            _code: &str,
        ) -> Result<AudioData, SynthesisError> {
            Ok(AudioData::new(vec![0u8; 128], AudioMimeType::Mp3))
        }
    }

    struct MockPlayer;

    #[async_trait]
    impl AudioPlayer for MockPlayer {
        async fn play(&self, _audio: &AudioData) -> Result<(), PlaybackError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn full_pipeline_ingredients_to_speech() {
        // tomato, onion, garlic -> three names -> pick one -> fetch -> translate -> speak
        let generator = ScriptedGenerator::new(vec![
            Ok("Tomato Soup, Garlic Pasta, Onion Curry".into()),
            Ok("Garlic Pasta\n\n20 minutes\n\nIngredients: garlic, pasta\n\nSteps: boil, toss".into()),
            Ok("Pâtes à l'ail\n\n20 minutes\n\nIngrédients: ail, pâtes\n\nÉtapes: bouillir".into()),
        ]);
        let use_case = AssistUseCase::new(generator, MockSynthesizer, MockPlayer);

        let query = Query::new("tomato, onion, garlic");
        let suggestions = use_case.suggest(&query).await;
        assert_eq!(
            suggestions.names,
            vec!["Tomato Soup", "Garlic Pasta", "Onion Curry"]
        );

        let output = use_case
            .present(PresentInput {
                recipe_name: suggestions.names[1].clone(),
                language: Language::French,
                speak: true,
            })
            .await;

        assert!(output.recipe_text.contains("Ingrédients"));
        assert!(output.fetch_failure.is_none());
        assert!(!output.translation_fell_back);
        let speech = output.speech.unwrap().unwrap();
        assert_eq!(speech.language_code, "fr");
        assert!(!speech.language_fell_back);
    }

    #[tokio::test]
    async fn empty_query_never_calls_backend() {
        let generator = ScriptedGenerator::new(vec![]);
        let use_case = AssistUseCase::new(generator, MockSynthesizer, MockPlayer);

        let outcome = use_case.suggest(&Query::empty()).await;

        assert!(outcome.names.is_empty());
        assert!(outcome.failure.is_none());
    }

    #[tokio::test]
    async fn english_output_skips_translation() {
        let generator = ScriptedGenerator::new(vec![Ok("Tomato Soup\n\nSteps...".into())]);
        let use_case = AssistUseCase::new(generator, MockSynthesizer, MockPlayer);

        let output = use_case
            .present(PresentInput {
                recipe_name: "Tomato Soup".into(),
                language: Language::English,
                speak: false,
            })
            .await;

        assert_eq!(output.recipe_text, "Tomato Soup\n\nSteps...");
        assert!(!output.translation_fell_back);
        assert!(output.speech.is_none());
    }

    #[tokio::test]
    async fn translation_failure_keeps_english_text() {
        let generator = ScriptedGenerator::new(vec![
            Ok("Tomato Soup\n\nSteps...".into()),
            Err(GenerationError::RequestFailed("net down".into())),
        ]);
        let use_case = AssistUseCase::new(generator, MockSynthesizer, MockPlayer);

        let output = use_case
            .present(PresentInput {
                recipe_name: "Tomato Soup".into(),
                language: Language::Spanish,
                speak: false,
            })
            .await;

        assert_eq!(output.recipe_text, "Tomato Soup\n\nSteps...");
        assert!(output.translation_fell_back);
    }

    #[tokio::test]
    async fn fetch_failure_yields_empty_text_and_no_speech() {
        let generator =
            ScriptedGenerator::new(vec![Err(GenerationError::ApiError("500".into()))]);
        let use_case = AssistUseCase::new(generator, MockSynthesizer, MockPlayer);

        let output = use_case
            .present(PresentInput {
                recipe_name: "Ghost Stew".into(),
                language: Language::French,
                speak: true,
            })
            .await;

        assert!(output.recipe_text.is_empty());
        assert!(output.fetch_failure.is_some());
        assert!(output.speech.is_none());
    }
}
