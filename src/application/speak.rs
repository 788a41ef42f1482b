//! Speak use case: clean text, resolve language, synthesize, play
//!
//! The synthesized audio lives in memory for the duration of the call and is
//! dropped on every exit path, so no temporary file outlives playback.

use thiserror::Error;

use crate::domain::audio::AudioData;
use crate::domain::language::Language;
use crate::domain::recipe::sanitize_for_speech;

use super::ports::{AudioPlayer, PlaybackError, SpeechSynthesizer, SynthesisError};

/// Errors from the speak use case
#[derive(Debug, Error)]
pub enum SpeakError {
    /// Nothing pronounceable remained after punctuation stripping;
    /// no synthesis call was made.
    #[error("No valid text to speak")]
    NoValidText,

    #[error("Speech synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),

    #[error("Audio playback failed: {0}")]
    Playback(#[from] PlaybackError),
}

/// Result of a successful speak call
#[derive(Debug, Clone)]
pub struct SpeakOutcome {
    /// Locale code actually submitted to the synthesizer
    pub language_code: &'static str,
    /// True when the requested language is outside the synthesis allow-list
    /// and English was substituted
    pub language_fell_back: bool,
    /// Size of the synthesized audio, human readable
    pub audio_size: String,
}

/// Speech output over synthesis and playback ports
pub struct SpeakUseCase<S, P>
where
    S: SpeechSynthesizer,
    P: AudioPlayer,
{
    synthesizer: S,
    player: P,
}

impl<S, P> SpeakUseCase<S, P>
where
    S: SpeechSynthesizer,
    P: AudioPlayer,
{
    pub fn new(synthesizer: S, player: P) -> Self {
        Self { synthesizer, player }
    }

    /// Resolve the synthesis language: the requested code if supported,
    /// otherwise English. Returns (code, fell_back).
    fn resolve_language(language: Language) -> (&'static str, bool) {
        if language.synthesis_supported() {
            (language.code(), false)
        } else {
            (Language::English.code(), true)
        }
    }

    /// Speak the given text aloud in the given language.
    ///
    /// Strips punctuation first; refuses with [`SpeakError::NoValidText`]
    /// (without calling the backend) when nothing remains. An unsupported
    /// language is substituted with English rather than failing.
    pub async fn speak(&self, text: &str, language: Language) -> Result<SpeakOutcome, SpeakError> {
        let cleaned = sanitize_for_speech(text);
        if cleaned.is_empty() {
            return Err(SpeakError::NoValidText);
        }

        let (code, fell_back) = Self::resolve_language(language);

        let audio: AudioData = self.synthesizer.synthesize(&cleaned, code).await?;
        let audio_size = audio.human_readable_size();

        self.player.play(&audio).await?;

        Ok(SpeakOutcome {
            language_code: code,
            language_fell_back: fell_back,
            audio_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::audio::AudioMimeType;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingSynthesizer {
        calls: Arc<AtomicUsize>,
        last_code: Arc<Mutex<String>>,
    }

    #[async_trait]
    impl SpeechSynthesizer for RecordingSynthesizer {
        async fn synthesize(
            &self,
            _text: &str,
            language_code: &str,
        ) -> Result<AudioData, SynthesisError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_code.lock().unwrap() = language_code.to_string();
            Ok(AudioData::new(vec![0u8; 2048], AudioMimeType::Mp3))
        }
    }

    #[derive(Default)]
    struct CountingPlayer {
        plays: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl AudioPlayer for CountingPlayer {
        async fn play(&self, _audio: &AudioData) -> Result<(), PlaybackError> {
            self.plays.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn speaks_supported_language() {
        let synth = RecordingSynthesizer::default();
        let code = Arc::clone(&synth.last_code);
        let player = CountingPlayer::default();
        let plays = Arc::clone(&player.plays);
        let use_case = SpeakUseCase::new(synth, player);

        let outcome = use_case
            .speak("Boil the pasta.", Language::French)
            .await
            .unwrap();

        assert_eq!(outcome.language_code, "fr");
        assert!(!outcome.language_fell_back);
        assert_eq!(*code.lock().unwrap(), "fr");
        assert_eq!(plays.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn punctuation_only_text_skips_synthesis() {
        let synth = RecordingSynthesizer::default();
        let calls = Arc::clone(&synth.calls);
        let use_case = SpeakUseCase::new(synth, CountingPlayer::default());

        let result = use_case.speak("!!!@@@", Language::English).await;

        assert!(matches!(result, Err(SpeakError::NoValidText)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unsupported_language_falls_back_to_english() {
        let synth = RecordingSynthesizer::default();
        let code = Arc::clone(&synth.last_code);
        let use_case = SpeakUseCase::new(synth, CountingPlayer::default());

        let outcome = use_case
            .speak("Add the spices.", Language::Telugu)
            .await
            .unwrap();

        assert_eq!(outcome.language_code, "en");
        assert!(outcome.language_fell_back);
        assert_eq!(*code.lock().unwrap(), "en");
    }

    #[tokio::test]
    async fn synthesis_error_propagates() {
        struct FailingSynth;

        #[async_trait]
        impl SpeechSynthesizer for FailingSynth {
            async fn synthesize(
                &self,
                _text: &str,
                _code: &str,
            ) -> Result<AudioData, SynthesisError> {
                Err(SynthesisError::EmptyAudio)
            }
        }

        let use_case = SpeakUseCase::new(FailingSynth, CountingPlayer::default());
        let result = use_case.speak("Stir the soup.", Language::English).await;

        assert!(matches!(result, Err(SpeakError::Synthesis(_))));
    }
}
