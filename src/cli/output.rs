/// Output: colored field lines to stdout, errors to stderr. TTY detection.
use std::io::{self, IsTerminal, Write};

use colored::Colorize;
use tracing::debug;

use super::args::ColorChoice;
use crate::errors::AppError;
use crate::report::Line;

/// Usage synopsis printed alongside argument errors.
pub const USAGE: &str =
    "Usage: ghpp <owner>/<repo> [--include=\"\"] [--exclude=\"\"] [--since] [--short]";

/// Resolve the effective color mode, handling TTY auto-detection.
#[must_use]
pub fn resolve_color(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stdout().is_terminal(),
    }
}

/// Output context passed to commands.
pub struct OutputCtx {
    /// Paint lines with ANSI colors.
    pub colorize: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(color: ColorChoice) -> Self {
        // `colored` disables itself off-TTY; honor an explicit request anyway.
        if color == ColorChoice::Always {
            colored::control::set_override(true);
        }
        Self {
            colorize: resolve_color(color),
        }
    }

    /// Start a named step timer. Logs elapsed time at debug level on drop.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> StepTimer {
        StepTimer::new(label)
    }
}

/// Write rendered lines, one per row.
///
/// # Errors
///
/// Returns any I/O error from `out`.
pub fn write_lines<W: Write>(out: &mut W, lines: &[Line], colorize: bool) -> io::Result<()> {
    for line in lines {
        if colorize {
            writeln!(out, "{}", line.text.as_str().color(line.color))?;
        } else {
            writeln!(out, "{}", line.text)?;
        }
    }
    Ok(())
}

/// Write an error to stderr, with the usage synopsis for argument errors.
pub fn write_error(err: &AppError) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    let _ = writeln!(out, "Error: {err}");
    if err.is_usage() {
        let _ = writeln!(out, "{USAGE}");
    }
}

// --- Step timer ---

/// A RAII timer that logs elapsed milliseconds on drop.
///
/// Created via [`OutputCtx::timer`]. Silent unless debug logging is enabled.
pub struct StepTimer {
    label: &'static str,
    start: std::time::Instant,
}

impl StepTimer {
    #[must_use]
    fn new(label: &'static str) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for StepTimer {
    fn drop(&mut self) {
        let ms = self.start.elapsed().as_secs_f64() * 1000.0;
        debug!(step = self.label, "{ms:.2}ms");
    }
}
