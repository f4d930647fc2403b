#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! ghpp — pretty-print GitHub repository metadata.

mod cli;
mod commands;
mod errors;
mod github;
mod logging;
mod report;
mod types;

use std::time::Duration;

use chrono::Utc;
use clap::Parser;

use cli::{Cli, OutputCtx, write_error};
use errors::AppError;
use github::GitHubClient;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = logging::init(cli.debug) {
        eprintln!("warning: {err:#}");
    }

    let ctx = OutputCtx::new(cli.color);

    if let Err(err) = try_main(&cli, &ctx) {
        tracing::debug!(error = ?err, "run failed");
        write_error(&err);
        std::process::exit(err.exit_code());
    }
}

fn try_main(cli: &Cli, ctx: &OutputCtx) -> Result<(), AppError> {
    let connect = || GitHubClient::new(&cli.api_url, Duration::from_secs(cli.timeout));
    let stdout = std::io::stdout();
    commands::run(cli, ctx, connect, Utc::now(), &mut stdout.lock())
}
