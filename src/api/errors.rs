use thiserror::Error;

/// Errors surfaced by calls to the storefront backend
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed before a response was produced
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend rejected the request; the message is the human-readable
    /// one from the response body when the body carried one
    #[error("{0}")]
    Remote(String),

    /// Failed to parse a successful response
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
