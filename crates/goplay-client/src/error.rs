//! Error taxonomy for the goplay client.

use thiserror::Error;

/// Errors produced by the gateway client.
///
/// Deliberately a single kind: network failures, malformed responses
/// and non-2xx statuses all collapse into one human-readable message.
/// Callers needing finer-grained handling must inspect the text.
#[derive(Debug, Error)]
pub enum PlayError {
    /// The remote compile/share service failed or refused the call.
    #[error("{message}")]
    RemoteService {
        /// Status phrase, suffixed with the response body when present.
        message: String,
    },
}

impl PlayError {
    pub(crate) fn remote(message: impl Into<String>) -> Self {
        PlayError::RemoteService {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for PlayError {
    fn from(err: reqwest::Error) -> Self {
        PlayError::remote(err.to_string())
    }
}

/// Result type for goplay client operations.
pub type Result<T> = std::result::Result<T, PlayError>;
