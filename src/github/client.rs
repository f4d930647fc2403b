/// Blocking client for `GET /repos/{owner}/{repo}`.
use std::time::Duration;

use reqwest::blocking::{Client, ClientBuilder};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::debug;

use super::errors::FetchError;
use crate::types::{RepoSlug, RepositoryRecord};

/// Public GitHub REST endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Request timeout applied when none is given on the command line.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// GitHub rejects requests without a `User-Agent`.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Anything that can look up a repository by slug.
pub trait RepoSource {
    /// Fetch and fully decode one repository.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` on transport failure, non-success status, or an
    /// undecodable body.
    fn fetch(&self, slug: &RepoSlug) -> Result<RepositoryRecord, FetchError>;
}

impl<T: RepoSource + ?Sized> RepoSource for &T {
    fn fetch(&self, slug: &RepoSlug) -> Result<RepositoryRecord, FetchError> {
        (**self).fetch(slug)
    }
}

/// `RepoSource` backed by the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    base_url: String,
    client: Client,
}

impl GitHubClient {
    /// Create a client for `base_url` (e.g., `https://api.github.com`).
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Transport` if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        Self::with_builder(base_url, client_builder(timeout))
    }

    fn with_builder(base_url: &str, builder: ClientBuilder) -> Result<Self, FetchError> {
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client: builder.build()?,
        })
    }

    /// Endpoint URL for a repository.
    #[must_use]
    pub fn repo_url(&self, slug: &RepoSlug) -> String {
        format!("{}/repos/{}/{}", self.base_url, slug.owner, slug.repo)
    }
}

impl RepoSource for GitHubClient {
    fn fetch(&self, slug: &RepoSlug) -> Result<RepositoryRecord, FetchError> {
        let url = self.repo_url(slug);
        debug!(%url, "requesting repository");

        // The response (and its connection) is dropped on every return path.
        let response = self.client.get(&url).send()?;
        let status = response.status();
        debug!(status = status.as_u16(), "received response");

        if status != reqwest::StatusCode::OK {
            return Err(FetchError::Api {
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        parse_repository(&body)
    }
}

/// Base configuration shared by every GitHub request.
fn client_builder(timeout: Duration) -> ClientBuilder {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/vnd.github+json"),
    );

    Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .timeout(timeout)
}

/// Decode a `GET /repos/{owner}/{repo}` response body.
///
/// # Errors
///
/// Returns `FetchError::Decode` if the body is not a repository object.
pub fn parse_repository(body: &str) -> Result<RepositoryRecord, FetchError> {
    Ok(serde_json::from_str(body)?)
}
