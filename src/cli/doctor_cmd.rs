//! Doctor command: environment diagnostics

use cpal::traits::HostTrait;

use crate::application::ports::ConfigStore;
use crate::infrastructure::net::port_is_free;

use super::presenter::Presenter;

/// Run advisory environment checks. Returns false if any check failed.
pub async fn handle_doctor_command<S: ConfigStore>(
    port: Option<u16>,
    store: &S,
    presenter: &Presenter,
) -> bool {
    let mut all_ok = true;

    // API key: env var wins, config file is the fallback
    let has_key = std::env::var("GEMINI_API_KEY").is_ok()
        || store
            .load()
            .await
            .ok()
            .and_then(|c| c.api_key)
            .is_some();
    if has_key {
        presenter.success("API key configured");
    } else {
        presenter.error("API key not found (set GEMINI_API_KEY or run 'voice-chef config set api_key <key>')");
        all_ok = false;
    }

    let host = cpal::default_host();

    if host.default_input_device().is_some() {
        presenter.success("Microphone available");
    } else {
        presenter.warn("No default microphone (typed input still works)");
    }

    if host.default_output_device().is_some() {
        presenter.success("Audio output available");
    } else {
        presenter.warn("No default audio output (use --no-speak)");
    }

    if let Some(port) = port {
        if port_is_free(port) {
            presenter.success(&format!("Port {} is free", port));
        } else {
            presenter.warn(&format!("Port {} is already in use", port));
        }
    }

    all_ok
}
