//! Errors returned by the food API client.

use reqwest::StatusCode;
use thiserror::Error;

/// A failed remote call against the food backend.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Food API error ({status}): {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse {what} response: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: reqwest::Error,
    },
}
