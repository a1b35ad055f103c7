//! # homewatch-adapter-http-client
//!
//! Outbound HTTP adapter using [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the `FeedClient` port: fetch the pv JSON feeds
//! - Implement the `RelaySwitch` port: send relay toggles to the gateway
//! - Map transport failures onto the domain error
//!
//! ## Dependency rule
//! Depends on `homewatch-app` (for port traits) and `homewatch-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

use std::time::Duration;

pub mod error;
pub mod feed;
pub mod relay;

pub use error::HttpClientError;
pub use feed::HttpFeedClient;
pub use relay::HttpRelaySwitch;

/// Build the shared client with a per-request `timeout`.
///
/// # Errors
///
/// Returns [`HttpClientError::Request`] if the TLS backend cannot be initialised.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, HttpClientError> {
    Ok(reqwest::Client::builder().timeout(timeout).build()?)
}

/// Validate and normalise a base URL (no trailing slash).
fn base_url(raw: &str) -> Result<String, HttpClientError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(HttpClientError::InvalidBaseUrl(raw.to_string()))
    }
}
