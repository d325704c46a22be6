//! Terminal fault type for the transcription pipeline.
//!
//! Every request ends in exactly one of two outcomes: a transcript, or a
//! single `Fault`. Faults are constructed at the point of detection with a
//! specific human-readable message and propagate unwrapped to the caller.

use thiserror::Error;

/// Failure outcome of a transcription request.
#[derive(Debug, Error)]
pub enum Fault {
    /// No usable API credential in any of the configured sources.
    #[error("{0}")]
    MissingCredential(String),

    /// No media source was supplied, or the named file does not exist.
    #[error("{0}")]
    MissingSource(String),

    /// Unsupported file type, or a malformed / unsupported URL.
    #[error("{0}")]
    InvalidFormat(String),

    /// Source exceeds the 25 MiB ceiling.
    #[error("{0}")]
    OversizeSource(String),

    /// Remote source could not be reached (connect failure, timeout,
    /// or a non-success probe status).
    #[error("{0}")]
    UnreachableSource(String),

    /// I/O failure while reading the source or streaming the download.
    #[error("{0}")]
    TransferError(String),

    /// The transcription service rejected or failed the request.
    #[error("{0}")]
    RemoteServiceError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_message_is_verbatim() {
        let fault = Fault::OversizeSource("File size (26.0 MiB) exceeds the 25 MiB limit".into());
        assert_eq!(
            fault.to_string(),
            "File size (26.0 MiB) exceeds the 25 MiB limit"
        );
    }

    #[test]
    fn test_fault_variants_are_distinguishable() {
        let fault = Fault::MissingCredential("no key".into());
        assert!(matches!(fault, Fault::MissingCredential(_)));
    }
}
