//! Google Translate TTS adapter
//!
//! Uses the unauthenticated translate_tts endpoint, which takes the cleaned
//! text and a locale code as query parameters and answers with MP3 bytes.

use async_trait::async_trait;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};
use crate::domain::audio::{AudioData, AudioMimeType};

/// Default endpoint base
const TTS_BASE_URL: &str = "https://translate.google.com";

/// Speech synthesizer backed by the Google Translate TTS endpoint
pub struct GoogleTranslateTts {
    base_url: String,
    client: reqwest::Client,
}

impl GoogleTranslateTts {
    pub fn new() -> Self {
        Self {
            base_url: TTS_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Point at a custom base URL (tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/translate_tts", self.base_url)
    }
}

impl Default for GoogleTranslateTts {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTranslateTts {
    async fn synthesize(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<AudioData, SynthesisError> {
        let response = self
            .client
            .get(self.endpoint())
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language_code),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| SynthesisError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SynthesisError::ApiError(format!("HTTP {}", status)));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::RequestFailed(e.to_string()))?;

        if bytes.is_empty() {
            return Err(SynthesisError::EmptyAudio);
        }

        Ok(AudioData::new(bytes.to_vec(), AudioMimeType::Mp3))
    }
}
