/// Repository data decoded from the GitHub REST API.
///
/// Only the attributes the printer can display are modeled; every other key in
/// the response body is ignored by serde.
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Snapshot of one repository as returned by `GET /repos/{owner}/{repo}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryRecord {
    /// Short repository name (e.g., "rust").
    pub name: String,
    /// `owner/name` form (e.g., "rust-lang/rust").
    pub full_name: String,
    /// Browser URL of the repository.
    pub html_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub stargazers_count: u64,
    pub forks: u64,
    pub watchers: u64,
    /// Repository size in kilobytes, as reported by GitHub.
    pub size: u64,
    pub owner: Owner,
    /// Absent (or `null`) for repositories without a detected license.
    #[serde(default)]
    pub license: Option<License>,
}

/// Repository owner (user or organization).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Owner {
    /// Account handle.
    pub login: String,
}

/// Detected license of a repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct License {
    /// Human-readable license name (e.g., "MIT License").
    pub name: String,
}

/// An `owner/repo` pair taken from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub repo: String,
}

impl std::fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
