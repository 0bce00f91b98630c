//! Error types for the discussion API client.

use thiserror::Error;

/// Errors surfaced by discussion API operations.
///
/// The taxonomy is deliberately coarse: callers only distinguish
/// transport failures from server responses; validation and authorization
/// failures arrive as `Api` with whatever status the server chose.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// Client-side configuration problem (bad base URL, missing env).
    #[error("configuration error: {0}")]
    Config(String),

    /// Network request failed before a response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("server error ({status}): {message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Response body, as far as it could be read.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("response decode error: {0}")]
    Decode(String),

    /// A credentialed operation was invoked without a configured token.
    #[error("operation requires credentials but no auth token is configured")]
    MissingCredentials,
}

impl ClientError {
    /// True for failures that never reached the server.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
