//! Error types for the Instagram client.

use thiserror::Error;

/// Result type for Instagram client operations.
pub type Result<T> = std::result::Result<T, InstagramError>;

/// Instagram client errors.
///
/// Nothing here is retried internally; every kind propagates to the caller.
#[derive(Debug, Error)]
pub enum InstagramError {
    /// The endpoint answered with a non-success status
    #[error("failed to fetch post data: {0}")]
    FetchFailed(String),

    /// The request itself failed (connect, timeout, invalid header value)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not valid JSON
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The document parsed but carries no post fragment
    #[error("post not found")]
    PostNotFound,

    /// A field the output contract requires is absent from the document
    #[error("missing field in response: {path}")]
    MissingField { path: &'static str },
}
