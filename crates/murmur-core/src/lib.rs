//! murmur-core: media transcription request pipeline.
//!
//! Submit an audio/video asset — a local file or a remote URL — and receive
//! a text transcript from a hosted Whisper service. The crate covers
//! credential resolution, source validation, remote acquisition, and the
//! single-call orchestration; the speech model itself is an opaque remote
//! capability.

pub mod context;
pub mod credential;
pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod provider;
pub mod source;
pub mod validate;
pub mod verbose;

pub use context::{RequestContext, snapshot};
pub use credential::{CREDENTIAL_ENV_VAR, Credential, environment_credential, resolve};
pub use error::Fault;
pub use fetch::{DOWNLOAD_TIMEOUT_SECS, PROBE_TIMEOUT_SECS, ProbeReport, TemporaryAsset};
pub use pipeline::{RequestOptions, transcribe, transcribe_file, transcribe_url};
pub use provider::{
    GROQ_WHISPER_MODEL, GroqWhisperProvider, Transcript, TranscriptionBackend,
    TranscriptionRequest,
};
pub use source::{FALLBACK_REMOTE_FILE_NAME, MediaSource};
pub use validate::{
    ALLOWED_EXTENSIONS, MAX_SOURCE_BYTES, ValidationOutcome, validate_local, validate_remote,
};
pub use verbose::set_verbose;
