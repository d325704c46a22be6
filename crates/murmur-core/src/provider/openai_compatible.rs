//! Shared request plumbing for OpenAI-compatible transcription APIs.
//!
//! Groq's Whisper endpoint speaks the OpenAI audio API format, as do
//! self-hosted whisper servers:
//! - Multipart form upload with `model` and `file` fields
//! - Authorization via `Bearer` token
//! - JSON response with a `text` field

use anyhow::{Context, Result};
use serde::Deserialize;

use super::{DEFAULT_TIMEOUT_SECS, Transcript, TranscriptionRequest};

#[derive(Deserialize)]
struct OpenAICompatibleResponse {
    text: String,
}

/// Submit one transcription request to an OpenAI-compatible endpoint.
///
/// # Parameters
/// - `api_url`: full endpoint URL (e.g. ".../v1/audio/transcriptions")
/// - `model`: model name to request
/// - `api_key`: bearer token for authentication
/// - `request`: media payload and presentation filename
pub(crate) fn openai_compatible_transcribe(
    api_url: &str,
    model: &str,
    api_key: &str,
    request: TranscriptionRequest,
) -> Result<Transcript> {
    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        .build()
        .context("Failed to create HTTP client")?;

    let form = reqwest::blocking::multipart::Form::new()
        .text("model", model.to_string())
        .part(
            "file",
            reqwest::blocking::multipart::Part::bytes(request.audio_data)
                .file_name(request.filename)
                .mime_str(&request.mime_type)?,
        );

    let response = client
        .post(api_url)
        .header("Authorization", format!("Bearer {api_key}"))
        .multipart(form)
        .send()
        .context("Failed to send request")?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response
            .text()
            .unwrap_or_else(|_| "Unknown error".to_string());
        anyhow::bail!("API error ({status}): {error_text}");
    }

    let text = response.text().context("Failed to get response text")?;
    let resp: OpenAICompatibleResponse =
        serde_json::from_str(&text).context("Failed to parse API response")?;

    Ok(Transcript { text: resp.text })
}
