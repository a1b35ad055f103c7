//! HTTP client specific error type wrapping reqwest errors.

use homewatch_domain::error::HomewatchError;

/// Errors originating from outbound HTTP requests.
#[derive(Debug, thiserror::Error)]
pub enum HttpClientError {
    /// The request could not be sent or the body not read.
    #[error("http request failed")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The configured base URL is not an absolute http(s) URL.
    #[error("invalid base url {0:?}")]
    InvalidBaseUrl(String),
}

impl From<HttpClientError> for HomewatchError {
    fn from(err: HttpClientError) -> Self {
        Self::io(err)
    }
}
