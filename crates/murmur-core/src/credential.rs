//! API credential resolution.
//!
//! A credential is resolved fresh for every request from three possible
//! sources, highest precedence first:
//!
//! 1. the process environment (`GROQ_API_KEY`) — a deployment-pinned key
//!    must not be overridable by caller input
//! 2. a well-formed `Authorization: Bearer <token>` header on the inbound
//!    request
//! 3. the explicit value supplied in the request payload
//!
//! Blank values are treated as absent. The resolved secret is never logged
//! in full; verbose diagnostics see a short prefix only.

use std::fmt;

use crate::context::RequestContext;
use crate::error::Fault;

/// Environment variable holding the deployment-pinned API key.
pub const CREDENTIAL_ENV_VAR: &str = "GROQ_API_KEY";

const BEARER_PREFIX: &str = "Bearer ";

/// An opaque API secret, scoped to a single request.
pub struct Credential(String);

impl Credential {
    /// The secret value, for use in the outbound `Authorization` header.
    pub fn secret(&self) -> &str {
        &self.0
    }

    /// Short non-reversible prefix for audit output.
    fn audit_prefix(&self) -> String {
        self.0.chars().take(4).collect()
    }
}

// The full secret must never reach logs or error messages.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential({}****)", self.audit_prefix())
    }
}

/// Read the deployment credential from the process environment.
pub fn environment_credential() -> Option<String> {
    std::env::var(CREDENTIAL_ENV_VAR)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// Resolve the credential for one request.
///
/// `environment` is passed in rather than read here so callers (and tests)
/// control the environment source; see [`environment_credential`].
pub fn resolve(
    explicit: Option<&str>,
    environment: Option<&str>,
    context: Option<&RequestContext>,
) -> Result<Credential, Fault> {
    let (value, origin) = if let Some(env) = non_blank(environment) {
        (env, "environment")
    } else if let Some(token) = context.and_then(bearer_token) {
        (token, "authorization header")
    } else if let Some(given) = non_blank(explicit) {
        (given, "request payload")
    } else {
        return Err(Fault::MissingCredential(format!(
            "Please provide your Groq API key or set the {CREDENTIAL_ENV_VAR} environment variable"
        )));
    };

    let credential = Credential(value.to_string());
    crate::verbose!(
        "using credential from {origin} ({}****)",
        credential.audit_prefix()
    );
    Ok(credential)
}

/// Extract a well-formed bearer token from the `Authorization` header.
///
/// Anything without the `Bearer ` prefix, or with a blank token, is skipped
/// rather than treated as an error.
fn bearer_token(context: &RequestContext) -> Option<&str> {
    let header = context.header("Authorization")?;
    let token = header.strip_prefix(BEARER_PREFIX)?.trim();
    if token.is_empty() { None } else { Some(token) }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx_with_auth(value: &str) -> RequestContext {
        RequestContext::from_headers([("Authorization", value)])
    }

    #[test]
    fn test_environment_wins_over_header_and_explicit() {
        let ctx = ctx_with_auth("Bearer H");
        let credential = resolve(Some("X"), Some("E"), Some(&ctx)).unwrap();
        assert_eq!(credential.secret(), "E");
    }

    #[test]
    fn test_header_wins_over_explicit() {
        let ctx = ctx_with_auth("Bearer H");
        let credential = resolve(Some("X"), None, Some(&ctx)).unwrap();
        assert_eq!(credential.secret(), "H");
    }

    #[test]
    fn test_explicit_is_last_resort() {
        let credential = resolve(Some("X"), None, None).unwrap();
        assert_eq!(credential.secret(), "X");
    }

    #[test]
    fn test_no_source_fails_with_missing_credential() {
        let fault = resolve(None, None, None).unwrap_err();
        assert!(matches!(fault, Fault::MissingCredential(_)));
        assert!(fault.to_string().contains(CREDENTIAL_ENV_VAR));
    }

    #[test]
    fn test_blank_values_are_treated_as_absent() {
        let fault = resolve(Some("   "), Some(""), None).unwrap_err();
        assert!(matches!(fault, Fault::MissingCredential(_)));
    }

    #[test]
    fn test_malformed_authorization_header_is_skipped() {
        // Missing the Bearer prefix entirely
        let ctx = ctx_with_auth("Basic dXNlcjpwYXNz");
        let credential = resolve(Some("X"), None, Some(&ctx)).unwrap();
        assert_eq!(credential.secret(), "X");

        // Prefix present but token blank
        let ctx = ctx_with_auth("Bearer   ");
        let credential = resolve(Some("X"), None, Some(&ctx)).unwrap();
        assert_eq!(credential.secret(), "X");
    }

    #[test]
    fn test_debug_output_redacts_the_secret() {
        let credential = resolve(Some("gsk_supersecretvalue"), None, None).unwrap();
        let debug = format!("{credential:?}");
        assert!(!debug.contains("supersecretvalue"));
        assert!(debug.contains("gsk_"));
    }
}
