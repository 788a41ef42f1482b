//! Interaction session state
//!
//! The assistant keeps exactly two pieces of session-scoped mutable state:
//! whether a capture is in progress, and the last transcribed or typed text.
//! Both have explicit reset points instead of living as ambient globals.

/// Session-scoped state passed by reference into each interaction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    recording: bool,
    last_input: String,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    pub fn set_recording(&mut self, recording: bool) {
        self.recording = recording;
    }

    /// The last transcribed or typed text shown to the user
    pub fn last_input(&self) -> &str {
        &self.last_input
    }

    /// Overwrite the visible input text. A successful transcription lands
    /// here so the user sees what was heard and can edit it.
    pub fn set_last_input(&mut self, text: impl Into<String>) {
        self.last_input = text.into();
    }

    /// Reset all state for a fresh interaction
    pub fn reset(&mut self) {
        self.recording = false;
        self.last_input.clear();
    }
}
