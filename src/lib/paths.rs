use crate::error::FileError;
use crate::metadata::TrackMetadata;
use std::fs;
use std::path::{Path, PathBuf};

/// Characters rejected by at least one mainstream filesystem.
const ILLEGAL_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Replace every filesystem-illegal character with a hyphen, 1-for-1.
///
/// No collapsing of consecutive hyphens and no trimming, so output length
/// always equals input length and re-sanitizing is a no-op.
pub fn sanitize(component: &str) -> String {
    component
        .chars()
        .map(|c| {
            if ILLEGAL_CHARS.contains(&c) || c.is_control() {
                '-'
            } else {
                c
            }
        })
        .collect()
}

/// Directory a file with this metadata belongs in:
/// `root/artist/year - album`, every segment sanitized.
pub fn destination_dir(root: &Path, metadata: &TrackMetadata) -> PathBuf {
    root.join(sanitize(&metadata.artist)).join(format!(
        "{} - {}",
        sanitize(&metadata.year.to_string()),
        sanitize(&metadata.album)
    ))
}

/// Create the directory and any missing ancestors. Succeeds silently when
/// it already exists.
pub fn ensure_dir(path: &Path) -> Result<(), FileError> {
    fs::create_dir_all(path).map_err(|source| FileError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}
