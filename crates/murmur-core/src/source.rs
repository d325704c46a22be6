//! Media source representation.
//!
//! A [`MediaSource`] is created once per incoming request and discarded when
//! the request completes. It carries just enough to validate the source and
//! derive the filename presented to the transcription service.

use std::path::{Path, PathBuf};

use crate::error::Fault;

/// Filename presented to the service when a URL path yields no usable
/// segment (bare host, trailing slash, query-only URL).
pub const FALLBACK_REMOTE_FILE_NAME: &str = "audio_from_url";

/// The file or URL submitted for transcription.
#[derive(Debug, Clone)]
pub enum MediaSource {
    LocalFile {
        path: PathBuf,
        declared_size_bytes: u64,
    },
    RemoteUrl {
        url: String,
    },
}

impl MediaSource {
    /// Build a local source from a path, reading its size from the
    /// filesystem.
    pub fn local_file(path: impl Into<PathBuf>) -> Result<Self, Fault> {
        let path = path.into();
        let metadata = std::fs::metadata(&path).map_err(|_| {
            Fault::MissingSource(format!("Media file not found: {}", path.display()))
        })?;
        Ok(Self::LocalFile {
            declared_size_bytes: metadata.len(),
            path,
        })
    }

    pub fn remote_url(url: impl Into<String>) -> Self {
        Self::RemoteUrl { url: url.into() }
    }

    /// The filename presented to the transcription service.
    ///
    /// Local sources use the file's base name; remote sources use the last
    /// URL path segment, falling back to [`FALLBACK_REMOTE_FILE_NAME`].
    pub fn file_name(&self) -> String {
        match self {
            Self::LocalFile { path, .. } => path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or(FALLBACK_REMOTE_FILE_NAME)
                .to_string(),
            Self::RemoteUrl { url } => url_file_name(url),
        }
    }
}

/// Last path segment of a URL, with query and fragment stripped.
///
/// Returns `None` for a bare host, a trailing slash, or a query-only URL.
pub(crate) fn url_path_segment(url: &str) -> Option<&str> {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let without_query = without_scheme
        .split(['?', '#'])
        .next()
        .unwrap_or(without_scheme);
    // Everything before the first '/' is the host
    let (_, path) = without_query.split_once('/')?;
    let segment = path.rsplit('/').next().unwrap_or(path);
    if segment.is_empty() { None } else { Some(segment) }
}

fn url_file_name(url: &str) -> String {
    url_path_segment(url)
        .unwrap_or(FALLBACK_REMOTE_FILE_NAME)
        .to_string()
}

/// Lower-cased extension of a filename or URL path segment, if any.
pub(crate) fn file_extension(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
}

/// MIME type sent with the multipart file part, keyed on extension.
pub fn mime_for_file_name(name: &str) -> &'static str {
    match file_extension(name).as_deref() {
        Some("mp3") | Some("mpga") => "audio/mpeg",
        Some("mp4") | Some("m4a") => "audio/mp4",
        Some("mpeg") => "video/mpeg",
        Some("wav") => "audio/wav",
        Some("webm") => "audio/webm",
        Some("flac") => "audio/flac",
        Some("ogg") => "audio/ogg",
        Some("aac") => "audio/aac",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_file_name_is_base_name() {
        let source = MediaSource::LocalFile {
            path: PathBuf::from("/tmp/uploads/podcast.mp3"),
            declared_size_bytes: 1024,
        };
        assert_eq!(source.file_name(), "podcast.mp3");
    }

    #[test]
    fn test_remote_file_name_is_last_path_segment() {
        let source = MediaSource::remote_url("https://example.com/media/clip.mp4?session=9");
        assert_eq!(source.file_name(), "clip.mp4");
    }

    #[test]
    fn test_remote_file_name_falls_back_for_bare_host() {
        assert_eq!(
            MediaSource::remote_url("https://example.com").file_name(),
            FALLBACK_REMOTE_FILE_NAME
        );
        assert_eq!(
            MediaSource::remote_url("https://example.com/").file_name(),
            FALLBACK_REMOTE_FILE_NAME
        );
        assert_eq!(
            MediaSource::remote_url("https://example.com/?q=1").file_name(),
            FALLBACK_REMOTE_FILE_NAME
        );
    }

    #[test]
    fn test_file_extension_is_lower_cased() {
        assert_eq!(file_extension("TALK.MP3").as_deref(), Some("mp3"));
        assert_eq!(file_extension("talk"), None);
    }

    #[test]
    fn test_mime_mapping() {
        assert_eq!(mime_for_file_name("a.mp3"), "audio/mpeg");
        assert_eq!(mime_for_file_name("a.wav"), "audio/wav");
        assert_eq!(mime_for_file_name("a.unknown"), "application/octet-stream");
    }

    #[test]
    fn test_local_file_stats_the_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.wav");
        std::fs::write(&path, b"0123456789").unwrap();

        let source = MediaSource::local_file(&path).unwrap();
        match source {
            MediaSource::LocalFile {
                declared_size_bytes,
                ..
            } => assert_eq!(declared_size_bytes, 10),
            MediaSource::RemoteUrl { .. } => panic!("expected a local source"),
        }

        let fault = MediaSource::local_file(dir.path().join("missing.wav")).unwrap_err();
        assert!(matches!(fault, Fault::MissingSource(_)));
    }
}
