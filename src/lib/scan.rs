use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Collect every file under `root`, recursively. Directories are not
/// yielded and unreadable entries are skipped.
///
/// The list is materialized up front because the progress display needs
/// the total count. Order is filesystem-traversal order, not sorted.
pub fn collect_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    debug!(root = %root.display(), count = files.len(), "enumerated source files");
    Ok(files)
}
