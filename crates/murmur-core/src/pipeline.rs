//! Transcription request orchestration.
//!
//! One request runs: credential resolution, source validation, byte
//! materialization, a single capability call. Every outcome is a
//! `Result<Transcript, Fault>`; there are no partial results and nothing is
//! retried. For URL sources the downloaded temporary asset is released
//! before the call returns, whichever step failed.

use std::path::Path;

use crate::context::RequestContext;
use crate::credential::{self, Credential};
use crate::error::Fault;
use crate::fetch;
use crate::provider::{Transcript, TranscriptionBackend, TranscriptionRequest};
use crate::source::{MediaSource, mime_for_file_name};
use crate::validate;

/// Per-request credential sources, passed explicitly so the pipeline never
/// reads ambient state on its own.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Credential supplied directly in the request payload
    pub explicit_credential: Option<String>,
    /// Credential pinned in the process environment
    pub environment_credential: Option<String>,
    /// Inbound request metadata, when a transport carried any
    pub context: Option<RequestContext>,
}

impl RequestOptions {
    /// Populate the environment slot from `GROQ_API_KEY`.
    pub fn from_env() -> Self {
        Self {
            environment_credential: credential::environment_credential(),
            ..Self::default()
        }
    }
}

/// Transcribe a media source, local or remote.
pub fn transcribe(
    backend: &dyn TranscriptionBackend,
    source: &MediaSource,
    options: &RequestOptions,
) -> Result<Transcript, Fault> {
    // Credential first: a request that cannot authenticate never incurs
    // validation or network work.
    let credential = credential::resolve(
        options.explicit_credential.as_deref(),
        options.environment_credential.as_deref(),
        options.context.as_ref(),
    )?;

    match source {
        MediaSource::LocalFile {
            path,
            declared_size_bytes,
        } => run_local(backend, &credential, path, *declared_size_bytes),
        MediaSource::RemoteUrl { url } => run_remote(backend, &credential, url),
    }
}

/// Transcribe a file on the local filesystem.
pub fn transcribe_file(
    backend: &dyn TranscriptionBackend,
    path: &Path,
    options: &RequestOptions,
) -> Result<Transcript, Fault> {
    let declared_size_bytes = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
    let source = MediaSource::LocalFile {
        path: path.to_path_buf(),
        declared_size_bytes,
    };
    transcribe(backend, &source, options)
}

/// Transcribe a remote URL.
pub fn transcribe_url(
    backend: &dyn TranscriptionBackend,
    url: &str,
    options: &RequestOptions,
) -> Result<Transcript, Fault> {
    let source = MediaSource::remote_url(url);
    transcribe(backend, &source, options)
}

fn run_local(
    backend: &dyn TranscriptionBackend,
    credential: &Credential,
    path: &Path,
    declared_size_bytes: u64,
) -> Result<Transcript, Fault> {
    if path.as_os_str().is_empty() {
        return Err(Fault::MissingSource(
            "Please provide an audio or video file".to_string(),
        ));
    }
    validate::validate_local(path, declared_size_bytes).into_result()?;

    let bytes = std::fs::read(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => {
            Fault::MissingSource(format!("Media file not found: {}", path.display()))
        }
        _ => Fault::TransferError(format!("Failed to read {}: {err}", path.display())),
    })?;

    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();
    submit(backend, credential, filename, bytes)
}

fn run_remote(
    backend: &dyn TranscriptionBackend,
    credential: &Credential,
    url: &str,
) -> Result<Transcript, Fault> {
    let url = url.trim();
    if url.is_empty() {
        return Err(Fault::MissingSource(
            "Please provide a media URL".to_string(),
        ));
    }

    // Shape and extension checks happen before any network traffic.
    validate::validate_remote(url, None).into_result()?;

    let report = fetch::probe(url)?;
    if !report.reachable {
        return Err(Fault::UnreachableSource(format!(
            "Probe of {url} returned status {}",
            report.status_code
        )));
    }
    // Re-validate with the probed size so an oversize content-length fails
    // before any download traffic.
    validate::validate_remote(url, report.size_bytes).into_result()?;

    // The asset drops at the end of this scope, success or fault, which
    // removes its backing file.
    let asset = fetch::download(url)?;
    let bytes = asset.read_bytes()?;

    let filename = MediaSource::remote_url(url).file_name();
    submit(backend, credential, filename, bytes)
}

/// Single submission to the capability. Any provider error is reported as
/// `RemoteServiceError` with the underlying message; never retried.
fn submit(
    backend: &dyn TranscriptionBackend,
    credential: &Credential,
    filename: String,
    bytes: Vec<u8>,
) -> Result<Transcript, Fault> {
    let request = TranscriptionRequest {
        mime_type: mime_for_file_name(&filename).to_string(),
        filename,
        audio_data: bytes,
    };
    backend
        .transcribe(credential.secret(), request)
        .map_err(|err| Fault::RemoteServiceError(format!("{err:#}")))
}
