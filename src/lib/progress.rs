use crate::error::FileError;
use crate::organize::RunSummary;
use anyhow::Result;
use crossterm::cursor::MoveToColumn;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

/// A file that could not be processed, for display purposes.
pub struct FileFailure<'a> {
    pub path: &'a Path,
    pub error: &'a FileError,
}

/// Reporting seam around the organize loop. Pure observability: swapping
/// implementations never changes the run outcome.
pub trait ProgressReporter {
    /// Called once, after enumeration and before the first file.
    fn begin(&mut self, total: usize) -> Result<()>;

    /// Called once per file, success or failure.
    fn report(
        &mut self,
        current: usize,
        total: usize,
        elapsed: Duration,
        failure: Option<&FileFailure<'_>>,
    ) -> Result<()>;

    /// Called once, after the last file.
    fn finish(&mut self, summary: &RunSummary, elapsed: Duration) -> Result<()>;
}

/// Interactive reporter: rewrites a single progress line in place and
/// keeps failure lines scrolling above it.
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for ConsoleReporter {
    fn begin(&mut self, total: usize) -> Result<()> {
        println!("Found {total} files.");
        Ok(())
    }

    fn report(
        &mut self,
        current: usize,
        total: usize,
        elapsed: Duration,
        failure: Option<&FileFailure<'_>>,
    ) -> Result<()> {
        let mut out = io::stdout();
        execute!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;

        // Failure lines are newline-terminated so they stay on screen; the
        // progress line below them is rewritten on the next report.
        if let Some(failure) = failure {
            writeln!(
                out,
                "{}: Cannot process: {}",
                failure.path.display(),
                failure.error
            )?;
        }

        write!(out, "{}", progress_line(current, total, elapsed))?;
        out.flush()?;
        Ok(())
    }

    fn finish(&mut self, summary: &RunSummary, elapsed: Duration) -> Result<()> {
        let mut out = io::stdout();
        execute!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        writeln!(out, "{}", completion_line(summary, elapsed))?;
        Ok(())
    }
}

/// Non-interactive reporter: same text, one appended line per update.
/// Used when stdout is not a terminal.
pub struct PlainReporter;

impl ProgressReporter for PlainReporter {
    fn begin(&mut self, total: usize) -> Result<()> {
        println!("Found {total} files.");
        Ok(())
    }

    fn report(
        &mut self,
        current: usize,
        total: usize,
        elapsed: Duration,
        failure: Option<&FileFailure<'_>>,
    ) -> Result<()> {
        if let Some(failure) = failure {
            println!(
                "{}: Cannot process: {}",
                failure.path.display(),
                failure.error
            );
        }
        println!("{}", progress_line(current, total, elapsed));
        Ok(())
    }

    fn finish(&mut self, summary: &RunSummary, elapsed: Duration) -> Result<()> {
        println!("{}", completion_line(summary, elapsed));
        Ok(())
    }
}

fn progress_line(current: usize, total: usize, elapsed: Duration) -> String {
    format!(
        "[{current}/{total}], time elapsed: {}, remaining: {}",
        format_duration(elapsed),
        format_duration(estimate_remaining(elapsed, current, total))
    )
}

fn completion_line(summary: &RunSummary, elapsed: Duration) -> String {
    format!(
        "Finished: moved {}/{} files ({} failed) in {}",
        summary.moved,
        summary.total,
        summary.failed,
        format_duration(elapsed)
    )
}

/// Linear extrapolation from current throughput:
/// `elapsed_ms * (total/current - 1)`. Recomputed fresh each file, no
/// smoothing, so early estimates jitter.
fn estimate_remaining(elapsed: Duration, current: usize, total: usize) -> Duration {
    if current == 0 {
        return Duration::ZERO;
    }
    let factor = total as f64 / current as f64 - 1.0;
    Duration::from_secs_f64(elapsed.as_secs_f64() * factor)
}

fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    format!(
        "{}:{:02}:{:02}",
        total_secs / 3600,
        (total_secs % 3600) / 60,
        total_secs % 60
    )
}
