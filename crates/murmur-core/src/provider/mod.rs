//! Transcription providers.
//!
//! The pipeline treats the speech-to-text service as an opaque capability
//! behind [`TranscriptionBackend`]: submit bytes plus a filename, receive
//! text or an error. Provider errors stay `anyhow` internally; the pipeline
//! boundary maps them to `Fault::RemoteServiceError`.

mod groq;
mod openai_compatible;

pub use groq::{GROQ_API_URL, GROQ_WHISPER_MODEL, GroqWhisperProvider};

use anyhow::Result;

/// Timeout for the transcription call itself.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// One media payload ready for submission.
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    /// Filename presented to the service
    pub filename: String,
    /// Raw media bytes
    pub audio_data: Vec<u8>,
    /// MIME type for the multipart file part
    pub mime_type: String,
}

/// Plain text result returned by a provider.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Transcript {
    pub text: String,
}

/// The opaque transcription capability.
///
/// One call per request: the pipeline never retries a failed submission.
pub trait TranscriptionBackend: Send + Sync {
    /// Short identifier for diagnostics
    fn name(&self) -> &'static str;

    /// Submit the media and return the transcript text.
    fn transcribe(&self, api_key: &str, request: TranscriptionRequest) -> Result<Transcript>;
}
