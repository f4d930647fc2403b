/// GitHub REST layer: repository lookup and response decoding.
pub mod client;
pub mod errors;

pub use client::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, GitHubClient, RepoSource};
pub use errors::FetchError;
