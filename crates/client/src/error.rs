//! Error taxonomy for API calls.

use givehub_core::CoreError;

/// Errors surfaced by [`ApiClient`](crate::ApiClient) methods.
///
/// The variants mirror how failures reach the user: transport problems,
/// server refusals (carrying the server's own message when its JSON body
/// has one), success bodies that fail typed decoding, and local
/// validation that stops a request before anything is sent. No variant
/// is retried automatically.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP exchange itself failed (DNS, connect, timeout, TLS).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    ///
    /// `message` is the `message` (or `error`) field of the JSON error
    /// body when present, verbatim; otherwise a generic fallback naming
    /// the status code.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// A success response whose body did not decode into the expected
    /// type.
    #[error("Failed to decode {context} response: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The request was refused locally before anything was sent.
    #[error(transparent)]
    Validation(#[from] CoreError),
}

impl ApiError {
    /// HTTP status code for server refusals, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for 401/403 refusals, which the UI treats as a sign-in
    /// problem rather than an operation failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, ApiError::Api { status: 401 | 403, .. })
    }
}
