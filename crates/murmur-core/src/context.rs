//! Inbound request metadata.
//!
//! When a request arrives through a transport that carries headers, the
//! caller wraps them in a [`RequestContext`] and passes it down by parameter.
//! Nothing in this crate reads ambient request state; code paths that run
//! outside a request scope simply pass `None`.

use std::collections::BTreeMap;

/// Header name/value pairs from the inbound request, verbatim.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    headers: BTreeMap<String, String>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from an iterator of header name/value pairs.
    pub fn from_headers<I, K, V>(headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            headers: headers
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up a header value by name, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

/// Diagnostic dump of the inbound request metadata.
///
/// Returns every header verbatim, with no filtering — including
/// `Authorization` if the transport carried one, so the output is not a safe
/// place for secrets. Returns an empty map when invoked outside a request
/// scope. Not used by the transcription flow itself.
pub fn snapshot(context: Option<&RequestContext>) -> BTreeMap<String, String> {
    match context {
        Some(ctx) => ctx.headers.clone(),
        None => BTreeMap::new(),
    }
}
