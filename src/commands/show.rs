/// `show` pipeline: fetch one repository and print the selected fields.
use std::io::Write;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::cli::args::{Cli, parse_repo_arg};
use crate::cli::output::write_lines;
use crate::cli::OutputCtx;
use crate::errors::AppError;
use crate::github::{FetchError, RepoSource};
use crate::report::{DEFAULT_FIELDS, FieldSet, render};

/// Run the whole pipeline, writing lines to `out`.
///
/// `connect` builds the repository source; it is only called once the
/// `owner/repo` argument is valid. Nothing is written unless the repository
/// decodes completely.
///
/// # Errors
///
/// Returns `AppError` for a bad `owner/repo` argument, any fetch failure, or a
/// failed write to `out`.
pub fn run<C, S, W>(
    cli: &Cli,
    ctx: &OutputCtx,
    connect: C,
    now: DateTime<Utc>,
    out: &mut W,
) -> Result<(), AppError>
where
    C: FnOnce() -> Result<S, FetchError>,
    S: RepoSource,
    W: Write,
{
    let slug = parse_repo_arg(cli.repo.as_deref())?;
    let source = connect()?;
    debug!(%slug, "fetching repository");

    let t_fetch = ctx.timer("fetch");
    let record = source.fetch(&slug)?;
    drop(t_fetch);

    let fields = FieldSet::resolve(DEFAULT_FIELDS, &cli.include, &cli.exclude);
    debug!(fields = ?fields.ids().collect::<Vec<_>>(), "resolved fields");

    let lines = render(&record, &fields, cli.render_options(), now);
    write_lines(out, &lines, ctx.colorize)?;
    Ok(())
}
