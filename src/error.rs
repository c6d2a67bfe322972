//! Error types for the SoundCloud API client.

use thiserror::Error;

/// Errors that can occur when interacting with the SoundCloud API.
#[derive(Debug, Error)]
pub enum SoundcloudError {
    /// A constructor or method argument was rejected before any request
    /// was sent (client id not 32 characters, empty track list, …).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// HTTP transport error (connection refused, timeout, TLS failure, etc.).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx HTTP status.
    ///
    /// Common statuses:
    /// - `401` — credential missing or expired
    /// - `403` — client id not accepted
    /// - `404` — unknown track/playlist/user id
    #[error("API returned HTTP {status}: {body}")]
    Status {
        /// Upstream HTTP status code.
        status: u16,
        /// Raw response body, usually a JSON error document.
        body: String,
    },

    /// Failed to parse a response body that was expected to be JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A field or array element the operation depends on is absent from
    /// the response (e.g. a track with no transcodings).
    #[error("missing field in response: {0}")]
    Missing(String),
}

/// Convenience alias for `Result<T, SoundcloudError>`.
pub type Result<T> = std::result::Result<T, SoundcloudError>;
