/// Top-level errors reported by the `ghpp` binary.
use thiserror::Error;

use crate::github::FetchError;

/// Everything that can end a run early.
#[derive(Debug, Error)]
pub enum AppError {
    /// No `owner/repo` argument was given.
    #[error("missing repository argument")]
    MissingRepo,

    /// The positional argument is not of the form `owner/repo`.
    #[error("Invalid repo format '{arg}'. Use <owner>/<repo>")]
    InvalidRepo {
        /// The argument as typed.
        arg: String,
    },

    /// Fetching or decoding the repository failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Writing to stdout failed (e.g., closed pipe).
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl AppError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingRepo | Self::InvalidRepo { .. } | Self::Fetch(_) | Self::Output(_) => 1,
        }
    }

    /// Whether the usage synopsis should accompany the message.
    #[must_use]
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::MissingRepo | Self::InvalidRepo { .. })
    }
}
