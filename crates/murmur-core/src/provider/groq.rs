//! Groq Whisper transcription provider.
//!
//! The default endpoint is Groq's hosted API; `with_api_url` points the same
//! provider at any self-hosted OpenAI-compatible whisper server instead.

use anyhow::Result;

use super::{Transcript, TranscriptionBackend, TranscriptionRequest};
use crate::provider::openai_compatible::openai_compatible_transcribe;

/// Groq's OpenAI-compatible audio transcription endpoint.
pub const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/audio/transcriptions";

/// Fixed model identifier submitted with every request.
pub const GROQ_WHISPER_MODEL: &str = "whisper-large-v3-turbo";

/// Whisper transcription via Groq's hosted API.
#[derive(Debug, Clone)]
pub struct GroqWhisperProvider {
    api_url: String,
}

impl GroqWhisperProvider {
    pub fn new() -> Self {
        Self {
            api_url: GROQ_API_URL.to_string(),
        }
    }

    /// Use an alternative OpenAI-compatible endpoint.
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }
}

impl Default for GroqWhisperProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptionBackend for GroqWhisperProvider {
    fn name(&self) -> &'static str {
        "groq-whisper"
    }

    fn transcribe(&self, api_key: &str, request: TranscriptionRequest) -> Result<Transcript> {
        crate::verbose!(
            "submitting {} ({} bytes) to {}",
            request.filename,
            request.audio_data.len(),
            self.api_url
        );
        openai_compatible_transcribe(&self.api_url, GROQ_WHISPER_MODEL, api_key, request)
    }
}
