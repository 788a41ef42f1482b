//! End-to-end pipeline tests over mock ports
//!
//! Exercises the voice-to-recipe flow without touching the network or any
//! audio device: resolution, suggestion, fetch, translation, and speech.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use voice_chef::application::ports::{
    AudioPlayer, GenerationError, PlaybackError, SpeechSynthesizer, SynthesisError, Transcriber,
    TranscriptionError, TextGenerator,
};
use voice_chef::application::{
    AssistUseCase, InputResolver, InputSource, PresentInput, SpeakError, SpeakUseCase,
};
use voice_chef::domain::audio::{AudioData, AudioMimeType};
use voice_chef::domain::language::Language;
use voice_chef::domain::query::Query;
use voice_chef::domain::session::SessionState;

fn flac(bytes: Vec<u8>) -> AudioData {
    AudioData::new(bytes, AudioMimeType::Flac)
}

struct FixedTranscriber(Result<String, TranscriptionError>);

#[async_trait]
impl Transcriber for FixedTranscriber {
    async fn transcribe(&self, _audio: &AudioData) -> Result<String, TranscriptionError> {
        self.0.clone()
    }
}

struct ScriptedGenerator {
    responses: Mutex<Vec<Result<String, GenerationError>>>,
    calls: AtomicUsize,
}

impl ScriptedGenerator {
    fn new(responses: Vec<Result<String, GenerationError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses.lock().unwrap().remove(0)
    }
}

/// Synthesizer that records the language codes it was called with
#[derive(Default)]
struct RecordingSynthesizer {
    codes: Mutex<Vec<String>>,
}

#[async_trait]
impl SpeechSynthesizer for RecordingSynthesizer {
    async fn synthesize(&self, _text: &str, code: &str) -> Result<AudioData, SynthesisError> {
        self.codes.lock().unwrap().push(code.to_string());
        Ok(AudioData::new(vec![0u8; 64], AudioMimeType::Mp3))
    }
}

struct SilentPlayer;

#[async_trait]
impl AudioPlayer for SilentPlayer {
    async fn play(&self, _audio: &AudioData) -> Result<(), PlaybackError> {
        Ok(())
    }
}

#[tokio::test]
async fn voice_wins_over_typed_text() {
    let resolver = InputResolver::new(FixedTranscriber(Ok("paneer and peas".into())));
    let mut session = SessionState::new();

    let resolved = resolver
        .resolve(Some(&flac(vec![1, 2, 3])), "typed ingredients", &mut session)
        .await;

    assert_eq!(resolved.source, InputSource::Voice);
    assert_eq!(resolved.query.as_str(), "paneer and peas");
    // The transcript replaces the typed text for the next round
    assert_eq!(session.last_input(), "paneer and peas");
}

#[tokio::test]
async fn failed_transcription_falls_back_to_typed_text() {
    let resolver = InputResolver::new(FixedTranscriber(Err(TranscriptionError::ServiceError(
        "connection reset".into(),
    ))));
    let mut session = SessionState::new();

    let resolved = resolver
        .resolve(Some(&flac(vec![1, 2, 3])), "lentils, rice", &mut session)
        .await;

    assert_eq!(resolved.source, InputSource::Typed);
    assert_eq!(resolved.query.as_str(), "lentils, rice");
    assert!(resolved.transcription_failure.is_some());
}

#[tokio::test]
async fn blank_transcript_is_unintelligible() {
    let resolver = InputResolver::new(FixedTranscriber(Ok("   ".into())));
    let mut session = SessionState::new();

    let resolved = resolver
        .resolve(Some(&flac(vec![1, 2, 3])), "", &mut session)
        .await;

    assert_eq!(resolved.source, InputSource::Empty);
    assert!(matches!(
        resolved.transcription_failure,
        Some(TranscriptionError::Unintelligible)
    ));
}

#[tokio::test]
async fn suggestions_are_capped_at_three() {
    let generator = ScriptedGenerator::new(vec![Ok(
        "Dal Fry, Veg Biryani, Samosa, Pakora, Khichdi".into(),
    )]);
    let use_case = AssistUseCase::new(generator, RecordingSynthesizer::default(), SilentPlayer);

    let outcome = use_case.suggest(&Query::new("lentils, rice, peas")).await;

    assert_eq!(outcome.names.len(), 3);
    assert_eq!(outcome.names[0], "Dal Fry");
    assert!(outcome.failure.is_none());
}

#[tokio::test]
async fn empty_query_short_circuits() {
    let generator = ScriptedGenerator::new(vec![]);
    let use_case = AssistUseCase::new(generator, RecordingSynthesizer::default(), SilentPlayer);

    let outcome = use_case.suggest(&Query::new("   ")).await;

    assert!(outcome.names.is_empty());
}

#[tokio::test]
async fn translation_failure_keeps_english_and_still_speaks() {
    let generator = ScriptedGenerator::new(vec![
        Ok("Dal Fry\n\n30 minutes\n\nIngredients: lentils\n\nSteps: simmer".into()),
        Err(GenerationError::RequestFailed("network down".into())),
    ]);
    let synthesizer = RecordingSynthesizer::default();
    let use_case = AssistUseCase::new(generator, synthesizer, SilentPlayer);

    let output = use_case
        .present(PresentInput {
            recipe_name: "Dal Fry".into(),
            language: Language::Hindi,
            speak: true,
        })
        .await;

    assert!(output.recipe_text.contains("Ingredients"));
    assert!(output.translation_fell_back);
    // English text still gets spoken, in the requested language's voice
    let speech = output.speech.unwrap().unwrap();
    assert_eq!(speech.language_code, "hi");
}

#[tokio::test]
async fn unsupported_language_speaks_english_voice() {
    let synthesizer = RecordingSynthesizer::default();
    let speaker = SpeakUseCase::new(synthesizer, SilentPlayer);

    let outcome = speaker
        .speak("vankaya kura recipe", Language::Telugu)
        .await
        .unwrap();

    assert_eq!(outcome.language_code, "en");
    assert!(outcome.language_fell_back);
}

#[tokio::test]
async fn punctuation_only_text_is_never_synthesized() {
    let synthesizer = RecordingSynthesizer::default();
    let speaker = SpeakUseCase::new(synthesizer, SilentPlayer);

    let result = speaker.speak("!!!@@@###", Language::English).await;

    assert!(matches!(result, Err(SpeakError::NoValidText)));
}

#[tokio::test]
async fn fetch_failure_never_reaches_translation_or_speech() {
    let generator =
        ScriptedGenerator::new(vec![Err(GenerationError::ApiError("server error".into()))]);
    let use_case = AssistUseCase::new(generator, RecordingSynthesizer::default(), SilentPlayer);

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

#[tokio::test]
async fn english_presentation_makes_exactly_one_backend_call() {
    let generator = ScriptedGenerator::new(vec![Ok("Tomato Soup\n\nSteps: simmer".into())]);
    let calls_handle = Arc::new(generator);

    // AssistUseCase takes ownership, so count via a wrapper
    struct Shared(Arc<ScriptedGenerator>);

    #[async_trait]
    impl TextGenerator for Shared {
        async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
            self.0.generate(prompt).await
        }
    }

    let use_case = AssistUseCase::new(
        Shared(Arc::clone(&calls_handle)),
        RecordingSynthesizer::default(),
        SilentPlayer,
    );

    let output = use_case
        .present(PresentInput {
            recipe_name: "Tomato Soup".into(),
            language: Language::English,
            speak: false,
        })
        .await;

    assert_eq!(output.recipe_text, "Tomato Soup\n\nSteps: simmer");
    assert_eq!(calls_handle.call_count(), 1);
}
