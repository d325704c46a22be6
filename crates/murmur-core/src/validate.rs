//! Source admissibility checks.
//!
//! Pure decision functions over inputs they are handed: no network, no
//! filesystem. Format and size are checked before any transcription call is
//! attempted so an obviously invalid source never costs a remote round trip.
//!
//! The extension allow-list and the 25 MiB ceiling are user-documented
//! limits of the external contract, not tuning knobs.

use std::path::Path;

use serde::Serialize;

use crate::error::Fault;
use crate::source::{file_extension, url_path_segment};

/// File extensions accepted for transcription (case-insensitive).
pub const ALLOWED_EXTENSIONS: &[&str] = &[
    "mp3", "mp4", "mpeg", "mpga", "m4a", "wav", "webm", "flac", "ogg", "aac",
];

/// Hard ceiling on source size: 25 MiB.
pub const MAX_SOURCE_BYTES: u64 = 25 * 1024 * 1024;

/// Result of an admissibility check. `reason` is always populated: a success
/// note, or the specific cause of rejection.
#[derive(Debug, Serialize)]
pub struct ValidationOutcome {
    pub accepted: bool,
    pub reason: String,
    #[serde(skip)]
    fault: Option<Fault>,
}

impl ValidationOutcome {
    fn accept(reason: impl Into<String>) -> Self {
        Self {
            accepted: true,
            reason: reason.into(),
            fault: None,
        }
    }

    fn reject(fault: Fault) -> Self {
        Self {
            accepted: false,
            reason: fault.to_string(),
            fault: Some(fault),
        }
    }

    /// Convert into the pipeline's result shape, surfacing the specific
    /// fault a rejection maps to.
    pub fn into_result(self) -> Result<(), Fault> {
        match self.fault {
            None => Ok(()),
            Some(fault) => Err(fault),
        }
    }
}

/// Check a local file's extension and size.
pub fn validate_local(path: &Path, size_bytes: u64) -> ValidationOutcome {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    if let Some(rejection) = check_extension(name) {
        return rejection;
    }
    if let Some(rejection) = check_size(size_bytes) {
        return rejection;
    }
    ValidationOutcome::accept("File is valid")
}

/// Check a remote URL's shape, extension, and (when probed) size.
///
/// An unknown size is provisionally accepted; the download path still
/// enforces the ceiling against actual transferred bytes.
pub fn validate_remote(url: &str, probed_size_bytes: Option<u64>) -> ValidationOutcome {
    if let Some(rejection) = check_url_shape(url) {
        return rejection;
    }
    let segment = url_path_segment(url).unwrap_or_default();
    if let Some(rejection) = check_extension(segment) {
        return rejection;
    }
    if let Some(size) = probed_size_bytes {
        if let Some(rejection) = check_size(size) {
            return rejection;
        }
    }
    ValidationOutcome::accept("URL is valid")
}

/// Scheme must be exactly http or https, and a host must follow it.
fn check_url_shape(url: &str) -> Option<ValidationOutcome> {
    let trimmed = url.trim();
    let Some((scheme, rest)) = trimmed.split_once("://") else {
        return Some(ValidationOutcome::reject(Fault::InvalidFormat(format!(
            "Invalid URL: {trimmed}"
        ))));
    };
    if scheme != "http" && scheme != "https" {
        return Some(ValidationOutcome::reject(Fault::InvalidFormat(format!(
            "Unsupported URL scheme '{scheme}': only http and https are supported"
        ))));
    }
    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if host.is_empty() {
        return Some(ValidationOutcome::reject(Fault::InvalidFormat(format!(
            "Invalid URL (missing host): {trimmed}"
        ))));
    }
    None
}

fn check_extension(name: &str) -> Option<ValidationOutcome> {
    let extension = file_extension(name);
    let allowed = extension
        .as_deref()
        .is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext));
    if allowed {
        return None;
    }
    Some(ValidationOutcome::reject(Fault::InvalidFormat(format!(
        "Invalid file type. Supported formats: {}",
        ALLOWED_EXTENSIONS.join(", ")
    ))))
}

fn check_size(size_bytes: u64) -> Option<ValidationOutcome> {
    if size_bytes <= MAX_SOURCE_BYTES {
        return None;
    }
    Some(ValidationOutcome::reject(Fault::OversizeSource(format!(
        "File size ({:.1} MiB) exceeds the 25 MiB limit",
        size_bytes as f64 / 1024.0 / 1024.0
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const MIB: u64 = 1024 * 1024;

    #[test]
    fn test_local_accepts_allowed_extensions() {
        for ext in ALLOWED_EXTENSIONS {
            let path = PathBuf::from(format!("podcast.{ext}"));
            let outcome = validate_local(&path, 5 * MIB);
            assert!(outcome.accepted, "{ext} should be accepted");
            assert!(!outcome.reason.is_empty());
        }
    }

    #[test]
    fn test_local_rejects_unknown_extension() {
        let outcome = validate_local(Path::new("notes.txt"), 1024);
        assert!(!outcome.accepted);
        assert!(outcome.reason.contains("Invalid file type"));
        assert!(matches!(
            outcome.into_result(),
            Err(Fault::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_local_rejects_missing_extension() {
        let outcome = validate_local(Path::new("recording"), 1024);
        assert!(!outcome.accepted);
        assert!(outcome.reason.contains("Invalid file type"));
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        assert!(validate_local(Path::new("TALK.MP3"), 1024).accepted);
        assert!(validate_local(Path::new("talk.FlAc"), 1024).accepted);
    }

    #[test]
    fn test_local_rejects_oversize() {
        let outcome = validate_local(Path::new("talk.mp3"), 26 * MIB);
        assert!(!outcome.accepted);
        assert!(outcome.reason.contains("26.0 MiB"));
        assert!(outcome.reason.contains("25 MiB"));
        assert!(matches!(
            outcome.into_result(),
            Err(Fault::OversizeSource(_))
        ));
    }

    #[test]
    fn test_local_accepts_exactly_at_the_ceiling() {
        assert!(validate_local(Path::new("talk.mp3"), MAX_SOURCE_BYTES).accepted);
    }

    #[test]
    fn test_remote_rejects_non_http_scheme() {
        let outcome = validate_remote("ftp://host/file.mp3", None);
        assert!(!outcome.accepted);
        assert!(outcome.reason.contains("scheme"));
    }

    #[test]
    fn test_remote_rejects_malformed_url() {
        let outcome = validate_remote("not a url", None);
        assert!(!outcome.accepted);
        assert!(outcome.reason.contains("Invalid URL"));

        let outcome = validate_remote("https:///file.mp3", None);
        assert!(!outcome.accepted);
        assert!(outcome.reason.contains("missing host"));
    }

    #[test]
    fn test_remote_rejects_url_without_extension() {
        let outcome = validate_remote("https://example.com/talk", None);
        assert!(!outcome.accepted);
        assert!(outcome.reason.contains("Invalid file type"));
    }

    #[test]
    fn test_remote_unknown_size_is_provisionally_accepted() {
        assert!(validate_remote("https://example.com/clip.mp4", None).accepted);
    }

    #[test]
    fn test_remote_rejects_probed_oversize() {
        let outcome = validate_remote("https://example.com/clip.mp4", Some(30 * MIB));
        assert!(!outcome.accepted);
        assert!(matches!(
            outcome.into_result(),
            Err(Fault::OversizeSource(_))
        ));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let first = validate_remote("https://example.com/talk", None);
        let second = validate_remote("https://example.com/talk", None);
        assert_eq!(first.accepted, second.accepted);
        assert_eq!(first.reason, second.reason);

        let first = validate_local(Path::new("podcast.mp3"), 5 * MIB);
        let second = validate_local(Path::new("podcast.mp3"), 5 * MIB);
        assert_eq!(first.accepted, second.accepted);
        assert_eq!(first.reason, second.reason);
    }
}
