/// CLI argument definitions via clap derive.
use clap::{Parser, ValueEnum};

use crate::errors::AppError;
use crate::github::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use crate::report::{RenderOptions, TimeStyle};
use crate::types::RepoSlug;

/// ghpp — pretty-print GitHub repository metadata.
#[derive(Debug, Parser)]
#[command(
    name = "ghpp",
    about = "Pretty-print GitHub repository metadata in the terminal",
    version
)]
pub struct Cli {
    /// Repository to show, as `<owner>/<repo>`.
    #[arg(value_name = "OWNER/REPO")]
    pub repo: Option<String>,

    /// Comma-separated fields to show in addition to the defaults.
    /// Known fields: name, full_name, html_url, created_at, updated_at,
    /// stargazers_count, forks, watchers, size, owner.login, license.name.
    #[arg(long, value_name = "FIELDS", default_value = "")]
    pub include: String,

    /// Comma-separated fields to hide (applied after --include).
    #[arg(long, value_name = "FIELDS", default_value = "")]
    pub exclude: String,

    /// Show created_at as elapsed time ("X years Y months Z days ago").
    #[arg(long)]
    pub since: bool,

    /// Show elapsed time in short form ("2y 5m ago"). Implies --since.
    #[arg(long)]
    pub short: bool,

    /// When to color output. Auto colors only when stdout is a terminal.
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorChoice,

    /// HTTP request timeout in seconds.
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Base URL of the GitHub REST API.
    #[arg(long, value_name = "URL", default_value = DEFAULT_API_URL, hide = true)]
    pub api_url: String,

    /// Log requests and step timings to stderr.
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Rendering switches implied by `--since` / `--short`.
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            relative_created: self.since || self.short,
            time_style: if self.short {
                TimeStyle::Short
            } else {
                TimeStyle::Long
            },
        }
    }
}

/// Color mode variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ColorChoice {
    /// Color when stdout is a terminal.
    #[default]
    Auto,
    /// Always emit ANSI colors.
    Always,
    /// Never emit ANSI colors.
    Never,
}

/// Split an `owner/repo` argument.
///
/// # Errors
///
/// Returns `AppError::MissingRepo` when the argument is absent, and
/// `AppError::InvalidRepo` when it has other than exactly one `/` or an empty
/// side.
pub fn parse_repo_arg(arg: Option<&str>) -> Result<RepoSlug, AppError> {
    let arg = arg.ok_or(AppError::MissingRepo)?;
    let parts: Vec<&str> = arg.split('/').collect();
    match parts.as_slice() {
        [owner, repo] if !owner.is_empty() && !repo.is_empty() => Ok(RepoSlug {
            owner: (*owner).to_owned(),
            repo: (*repo).to_owned(),
        }),
        _ => Err(AppError::InvalidRepo {
            arg: arg.to_owned(),
        }),
    }
}
