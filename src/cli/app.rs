//! Main app runner for one assist interaction

use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use crate::application::ports::{AudioRecorder, ConfigStore, ProgressCallback, RecordingError};
use crate::application::{AssistUseCase, InputResolver, PresentInput, SpeakError};
use crate::domain::audio::AudioData;
use crate::domain::config::AppConfig;
use crate::domain::query::InputMode;
use crate::domain::session::SessionState;
use crate::infrastructure::{
    CpalRecorder, GeminiGenerator, GeminiTranscriber, GoogleTranslateTts, RodioPlayer,
    XdgConfigStore,
};

use super::args::AssistOptions;
use super::presenter::Presenter;
use super::signals::ShutdownSignal;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run one assist interaction: capture or accept a query, suggest recipe
/// names, then fetch and present the chosen recipe.
pub async fn run_assist(options: AssistOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    // Load API key from environment or config
    let api_key = match get_api_key().await {
        Ok(key) => key,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Setup signal handler
    let shutdown = ShutdownSignal::new();
    shutdown.setup();

    let mut session = SessionState::new();

    // Capture audio when the microphone was requested
    let audio = if options.use_mic {
        session.set_recording(true);
        let captured = capture_audio(&options, &mut presenter).await;
        session.set_recording(false);
        match captured {
            Ok(audio) => audio,
            Err(RecordingError::NoAudioDevice) => {
                presenter.warn("No microphone available; using typed input");
                None
            }
            Err(RecordingError::ReadFailed(_)) => {
                presenter.warn("Nothing was captured; using typed input");
                None
            }
            Err(e) => {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        None
    };

    if shutdown.is_shutdown() {
        presenter.warn("Cancelled");
        return ExitCode::from(EXIT_ERROR);
    }

    // Resolve the query: transcription wins over typed text
    let resolver = InputResolver::new(GeminiTranscriber::new(api_key.clone()));
    let typed = options.text.as_deref().unwrap_or("");

    let resolved = if audio.is_some() {
        presenter.start_spinner("Transcribing...");
        let resolved = resolver.resolve(audio.as_ref(), typed, &mut session).await;
        presenter.stop_spinner();
        resolved
    } else {
        resolver.resolve(None, typed, &mut session).await
    };

    if let Some(failure) = &resolved.transcription_failure {
        presenter.warn(&format!("Could not understand the audio: {}", failure));
    }

    if resolved.query.is_empty() {
        presenter.info("Nothing to cook with yet. Say or type some ingredients.");
        return ExitCode::from(EXIT_SUCCESS);
    }

    if shutdown.is_shutdown() {
        presenter.warn("Cancelled");
        return ExitCode::from(EXIT_ERROR);
    }

    // Build the pipeline over the live adapters
    let use_case = AssistUseCase::new(
        GeminiGenerator::new(api_key),
        GoogleTranslateTts::new(),
        RodioPlayer::new(),
    );

    // In ingredients mode, suggest names first and let the user pick one
    let recipe_name = match options.mode {
        InputMode::Ingredients => {
            presenter.start_spinner("Finding recipes...");
            let suggestions = use_case.suggest(&resolved.query).await;

            if let Some(failure) = &suggestions.failure {
                presenter.spinner_fail(&format!("Could not suggest recipes: {}", failure));
                return ExitCode::from(EXIT_ERROR);
            }
            if suggestions.names.is_empty() {
                presenter.spinner_fail("No recipes found for those ingredients");
                return ExitCode::from(EXIT_ERROR);
            }
            presenter.stop_spinner();

            presenter.heading("Recipe suggestions");
            presenter.numbered_list(&suggestions.names);

            match choose_recipe(&suggestions.names) {
                Some(name) => name,
                None => {
                    presenter.error("Invalid selection");
                    return ExitCode::from(EXIT_USAGE_ERROR);
                }
            }
        }
        InputMode::RecipeName => resolved.query.as_str().to_string(),
    };

    if shutdown.is_shutdown() {
        presenter.warn("Cancelled");
        return ExitCode::from(EXIT_ERROR);
    }

    presenter.start_spinner(&format!("Fetching recipe for {}...", recipe_name));
    let output = use_case
        .present(PresentInput {
            recipe_name: recipe_name.clone(),
            language: options.language,
            speak: options.speak,
        })
        .await;

    if let Some(failure) = &output.fetch_failure {
        presenter.spinner_fail(&format!("Could not fetch the recipe: {}", failure));
        return ExitCode::from(EXIT_ERROR);
    }
    presenter.stop_spinner();

    presenter.heading(&recipe_name);
    presenter.output(&output.recipe_text);

    if output.translation_fell_back {
        presenter.warn("Translation failed. Showing English result.");
    }

    match output.speech {
        Some(Ok(outcome)) => {
            if outcome.language_fell_back {
                presenter.warn(&format!(
                    "Speech not available for {}; spoke English instead",
                    options.language
                ));
            }
        }
        Some(Err(SpeakError::NoValidText)) => {
            presenter.warn("Nothing speakable in the recipe text");
        }
        Some(Err(e)) => {
            presenter.warn(&format!("Speech output failed: {}", e));
        }
        None => {}
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Record one listen window from the microphone with a progress spinner.
/// Returns None when capture produced no audio bytes.
async fn capture_audio(
    options: &AssistOptions,
    presenter: &mut Presenter,
) -> Result<Option<AudioData>, RecordingError> {
    presenter.show_recording_progress("Listening...");
    let on_progress: Option<ProgressCallback> = presenter.recording_progress_callback();

    let recorder = CpalRecorder::new();
    let result = recorder.record(options.duration, on_progress).await;

    match result {
        Ok(audio) if audio.is_empty() => {
            presenter.stop_spinner();
            Ok(None)
        }
        Ok(audio) => {
            presenter.spinner_success(&format!("Captured {}", audio.human_readable_size()));
            Ok(Some(audio))
        }
        Err(e) => {
            presenter.stop_spinner();
            Err(e)
        }
    }
}

/// Read the user's pick from stdin. Accepts a 1-based number or a name;
/// an empty line picks the first suggestion.
fn choose_recipe(names: &[String]) -> Option<String> {
    eprint!("Pick a recipe [1-{}]: ", names.len());
    let _ = io::stderr().flush();

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return Some(names[0].clone());
    }

    parse_choice(&line, names)
}

/// Interpret one selection line against the suggestion list
fn parse_choice(line: &str, names: &[String]) -> Option<String> {
    let line = line.trim();

    if line.is_empty() {
        return Some(names[0].clone());
    }

    if let Ok(n) = line.parse::<usize>() {
        return names.get(n.checked_sub(1)?).cloned();
    }

    names
        .iter()
        .find(|name| name.eq_ignore_ascii_case(line))
        .cloned()
}

/// Get API key from environment or config file
pub async fn get_api_key() -> Result<String, String> {
    // Check environment first
    if let Ok(key) = env::var("GEMINI_API_KEY") {
        if !key.is_empty() {
            return Ok(key);
        }
    }

    // Check config file
    let store = XdgConfigStore::new();
    let config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    config.api_key.ok_or_else(|| {
        "Missing API key. Set GEMINI_API_KEY environment variable or run 'voice-chef config set api_key <key>'".to_string()
    })
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Build env config
    let env_config = AppConfig {
        api_key: env::var("GEMINI_API_KEY").ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}
