pub mod file;
pub mod url;

use murmur_core::RequestOptions;

/// Credential sources for a CLI invocation: the `--api-key` flag plus the
/// process environment. There is no inbound request transport, so no header
/// context.
pub(crate) fn request_options(api_key: Option<String>) -> RequestOptions {
    RequestOptions {
        explicit_credential: api_key,
        ..RequestOptions::from_env()
    }
}
