use crate::error::FileError;
use crate::metadata::MetadataProvider;
use crate::progress::{FileFailure, ProgressReporter};
use crate::{mover, paths, scan};
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::warn;

/// Counts for a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub moved: usize,
    pub failed: usize,
}

/// Process one file: read tags, build the destination directory, move.
///
/// Returns the file's new path, or the per-file error that left it at its
/// original location.
pub fn relocate_file(
    file: &Path,
    target_root: &Path,
    provider: &dyn MetadataProvider,
) -> Result<PathBuf, FileError> {
    let metadata = provider.read(file)?;
    let dest_dir = paths::destination_dir(target_root, &metadata);
    paths::ensure_dir(&dest_dir)?;
    mover::move_into(file, &dest_dir)
}

/// Run the whole pipeline: enumerate the source tree, then relocate each
/// file in turn. Per-file failures are reported and skipped; only
/// enumeration or reporting failures abort the run.
pub fn organize(
    source: &Path,
    target: &Path,
    provider: &dyn MetadataProvider,
    reporter: &mut dyn ProgressReporter,
) -> Result<RunSummary> {
    let files = scan::collect_files(source)?;
    let total = files.len();
    reporter.begin(total)?;

    let started = Instant::now();
    let mut moved = 0;
    let mut failed = 0;

    for (index, file) in files.iter().enumerate() {
        let current = index + 1;
        match relocate_file(file, target, provider) {
            Ok(_) => {
                moved += 1;
                reporter.report(current, total, started.elapsed(), None)?;
            }
            Err(error) => {
                failed += 1;
                warn!(path = %file.display(), %error, "skipped file");
                let failure = FileFailure {
                    path: file,
                    error: &error,
                };
                reporter.report(current, total, started.elapsed(), Some(&failure))?;
            }
        }
    }

    let summary = RunSummary {
        total,
        moved,
        failed,
    };
    reporter.finish(&summary, started.elapsed())?;
    Ok(summary)
}
