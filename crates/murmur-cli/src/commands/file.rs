//! Transcribe a local media file.

use std::path::Path;

use anyhow::Result;
use murmur_core::{GroqWhisperProvider, transcribe_file};

use super::request_options;

pub fn run(path: &Path, api_key: Option<String>) -> Result<()> {
    let backend = GroqWhisperProvider::new();
    let transcript = transcribe_file(&backend, path, &request_options(api_key))?;
    println!("{}", transcript.text);
    Ok(())
}
