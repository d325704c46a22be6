//! Remote source acquisition.
//!
//! URL-sourced input goes through two network steps: a cheap metadata-only
//! probe, then a bounded streaming download into a [`TemporaryAsset`]. The
//! asset's backing file is removed when the value drops, on success and
//! failure paths alike, so no temporary file outlives the request that
//! created it.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Serialize;
use tempfile::NamedTempFile;

use crate::error::Fault;
use crate::validate::MAX_SOURCE_BYTES;

/// Timeout for the metadata-only reachability probe.
pub const PROBE_TIMEOUT_SECS: u64 = 10;

/// Timeout for the full streaming download.
pub const DOWNLOAD_TIMEOUT_SECS: u64 = 30;

/// Streaming copy granularity. Bounds peak memory regardless of source size.
const COPY_CHUNK_BYTES: usize = 8 * 1024;

/// Outcome of the reachability probe.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub reachable: bool,
    pub size_bytes: Option<u64>,
    pub status_code: u16,
}

/// A downloaded remote source, exclusively owned by one in-flight request.
///
/// The backing file lives in the system temp directory under a unique,
/// collision-free name, so concurrent requests never contend on the same
/// path. Dropping the asset removes the file; a removal failure is logged
/// and never masks the request's outcome.
pub struct TemporaryAsset {
    file: Option<NamedTempFile>,
    path: PathBuf,
    size_bytes: u64,
}

impl TemporaryAsset {
    fn new(file: NamedTempFile, size_bytes: u64) -> Self {
        Self {
            path: file.path().to_path_buf(),
            file: Some(file),
            size_bytes,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Bytes written during the download.
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Read the downloaded bytes back for the transcription call.
    pub fn read_bytes(&self) -> Result<Vec<u8>, Fault> {
        std::fs::read(&self.path).map_err(|err| {
            Fault::TransferError(format!("Failed to read downloaded media: {err}"))
        })
    }
}

impl Drop for TemporaryAsset {
    fn drop(&mut self) {
        if let Some(file) = self.file.take() {
            if let Err(err) = file.close() {
                crate::verbose!(
                    "failed to remove temporary file {}: {err}",
                    self.path.display()
                );
            } else {
                crate::verbose!("removed temporary file {}", self.path.display());
            }
        }
    }
}

/// Metadata-only reachability and size check.
///
/// A connect failure or timeout is a [`Fault::UnreachableSource`]; a
/// response, success or not, yields a report with the status captured.
pub fn probe(url: &str) -> Result<ProbeReport, Fault> {
    let client = client_with_timeout(PROBE_TIMEOUT_SECS)?;
    let response = client
        .head(url)
        .send()
        .map_err(|err| Fault::UnreachableSource(format!("Could not reach {url}: {err}")))?;

    let status = response.status();
    let report = ProbeReport {
        reachable: status.is_success(),
        size_bytes: response.content_length(),
        status_code: status.as_u16(),
    };
    crate::verbose!(
        "probe {url}: status {}, content-length {:?}",
        report.status_code,
        report.size_bytes
    );
    Ok(report)
}

/// Stream the source into a fresh temporary file.
///
/// The body is copied in 8 KiB chunks and the running byte count is checked
/// against the 25 MiB ceiling, so a source that lies about (or omits) its
/// declared size is cut off rather than written out in full. On any fault
/// the partially written file is removed before returning.
pub fn download(url: &str) -> Result<TemporaryAsset, Fault> {
    let client = client_with_timeout(DOWNLOAD_TIMEOUT_SECS)?;
    let mut response = client
        .get(url)
        .send()
        .map_err(|err| Fault::UnreachableSource(format!("Could not reach {url}: {err}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Fault::UnreachableSource(format!(
            "Download request for {url} returned status {status}"
        )));
    }

    // Dropping the NamedTempFile on any early return below removes the
    // partial file.
    let mut file = NamedTempFile::new()
        .map_err(|err| Fault::TransferError(format!("Failed to create temporary file: {err}")))?;

    let mut written: u64 = 0;
    let mut buffer = [0u8; COPY_CHUNK_BYTES];
    loop {
        let read = response.read(&mut buffer).map_err(|err| {
            Fault::TransferError(format!("Download of {url} was interrupted: {err}"))
        })?;
        if read == 0 {
            break;
        }
        file.write_all(&buffer[..read]).map_err(|err| {
            Fault::TransferError(format!("Failed to write downloaded media: {err}"))
        })?;
        written += read as u64;
        if written > MAX_SOURCE_BYTES {
            return Err(Fault::OversizeSource(format!(
                "Download of {url} exceeded the 25 MiB limit and was aborted"
            )));
        }
    }
    file.flush()
        .map_err(|err| Fault::TransferError(format!("Failed to write downloaded media: {err}")))?;

    let asset = TemporaryAsset::new(file, written);
    crate::verbose!(
        "downloaded {url} ({} bytes) to {}",
        asset.size_bytes,
        asset.path.display()
    );
    Ok(asset)
}

fn client_with_timeout(secs: u64) -> Result<reqwest::blocking::Client, Fault> {
    reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(secs))
        .build()
        .map_err(|err| Fault::TransferError(format!("Failed to create HTTP client: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset_with_bytes(bytes: &[u8]) -> TemporaryAsset {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        TemporaryAsset::new(file, bytes.len() as u64)
    }

    #[test]
    fn test_asset_reads_back_its_bytes() {
        let asset = asset_with_bytes(b"fake mp3 payload");
        assert_eq!(asset.size_bytes(), 16);
        assert_eq!(asset.read_bytes().unwrap(), b"fake mp3 payload");
    }

    #[test]
    fn test_asset_backing_file_is_removed_on_drop() {
        let asset = asset_with_bytes(b"payload");
        let path = asset.path().to_path_buf();
        assert!(path.exists());
        drop(asset);
        assert!(!path.exists());
    }

    #[test]
    fn test_assets_get_distinct_backing_paths() {
        let first = asset_with_bytes(b"a");
        let second = asset_with_bytes(b"b");
        assert_ne!(first.path(), second.path());
    }

    #[test]
    fn test_probe_of_unreachable_host_is_a_fault() {
        // Grab a free port, then close it so the connect is refused.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let fault = probe(&format!("http://127.0.0.1:{port}/clip.mp3")).unwrap_err();
        assert!(matches!(fault, Fault::UnreachableSource(_)));
    }
}
