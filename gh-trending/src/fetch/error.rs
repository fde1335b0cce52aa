//! Fetch error types.

use thiserror::Error;

/// Errors that can occur while downloading the trending page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request URL could not be built.
    #[error("Invalid trending URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport or body decoding failure.
    #[error("HTTP request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("HTTP request to '{url}' returned status {status}")]
    Status { url: String, status: u16 },
}
