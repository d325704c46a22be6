//! Transcribe a remote media URL.

use anyhow::Result;
use murmur_core::{GroqWhisperProvider, transcribe_url};

use super::request_options;

pub fn run(url: &str, api_key: Option<String>) -> Result<()> {
    let backend = GroqWhisperProvider::new();
    let transcript = transcribe_url(&backend, url, &request_options(api_key))?;
    println!("{}", transcript.text);
    Ok(())
}
