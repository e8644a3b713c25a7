//! Errors returned at the network-call boundary

use super::RecipeId;

/// Errors that can occur while talking to TheMealDB
///
/// An empty search is not an error - it resolves to `Ok(vec![])`.
/// `NotFound` is only produced by the lookup-by-id endpoint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Connection or transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx status from the API
    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },

    /// Body was not the JSON shape we expect
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// Lookup returned no record for the id
    #[error("Recipe {id} not found")]
    NotFound { id: RecipeId },
}

impl ApiError {
    /// Classify a reqwest failure
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }

    /// Short label for the error banner
    pub fn label(&self) -> &'static str {
        match self {
            Self::Timeout => "Timeout",
            Self::Network(_) => "Network error",
            Self::Status { .. } => "Server error",
            Self::Decode(_) => "Bad response",
            Self::NotFound { .. } => "Not found",
        }
    }
}
