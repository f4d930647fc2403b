/// Errors from fetching and decoding repository data.
use thiserror::Error;

/// Failures while talking to the GitHub API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("Failed to fetch repository: {0}")]
    Transport(String),

    /// The API answered with a non-success status.
    #[error("GitHub API returned status {status}")]
    Api {
        /// HTTP status code.
        status: u16,
    },

    /// The response body was not a valid repository object.
    #[error("Failed to parse JSON: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
