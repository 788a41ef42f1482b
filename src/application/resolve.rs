//! Input resolution use case
//!
//! Produces one resolved [`Query`] from optional captured audio and optional
//! typed text. A usable transcription wins over typed text; a failed
//! transcription is surfaced and the typed text (if any) is used instead.

use crate::domain::audio::AudioData;
use crate::domain::query::Query;
use crate::domain::session::SessionState;

use super::ports::{Transcriber, TranscriptionError};

/// Where the resolved query came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    /// Transcribed from captured audio
    Voice,
    /// Taken from the typed text field
    Typed,
    /// Neither source yielded usable text
    Empty,
}

/// Result of input resolution
#[derive(Debug)]
pub struct ResolvedInput {
    pub query: Query,
    pub source: InputSource,
    /// Transcription failure to surface to the user, if audio was present
    /// but could not be used. Never fatal; resolution falls back to text.
    pub transcription_failure: Option<TranscriptionError>,
}

impl ResolvedInput {
    fn empty(failure: Option<TranscriptionError>) -> Self {
        Self {
            query: Query::empty(),
            source: InputSource::Empty,
            transcription_failure: failure,
        }
    }
}

/// Input resolver over a speech-recognition port
pub struct InputResolver<T: Transcriber> {
    transcriber: T,
}

impl<T: Transcriber> InputResolver<T> {
    pub fn new(transcriber: T) -> Self {
        Self { transcriber }
    }

    /// Resolve one query from audio and/or typed text.
    ///
    /// A successful transcription becomes the query and overwrites the
    /// session's last-input text, so the user sees what was heard and can
    /// edit it before the next interaction.
    pub async fn resolve(
        &self,
        audio: Option<&AudioData>,
        typed: &str,
        session: &mut SessionState,
    ) -> ResolvedInput {
        let mut failure = None;

        if let Some(audio) = audio.filter(|a| !a.is_empty()) {
            match self.transcriber.transcribe(audio).await {
                Ok(transcript) => {
                    let query = Query::new(&transcript);
                    if query.is_empty() {
                        failure = Some(TranscriptionError::Unintelligible);
                    } else {
                        session.set_last_input(query.as_str());
                        return ResolvedInput {
                            query,
                            source: InputSource::Voice,
                            transcription_failure: None,
                        };
                    }
                }
                Err(e) => failure = Some(e),
            }
        }

        let query = Query::new(typed);
        if query.is_empty() {
            return ResolvedInput::empty(failure);
        }

        session.set_last_input(query.as_str());
        ResolvedInput {
            query,
            source: InputSource::Typed,
            transcription_failure: failure,
        }
    }
}
