use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure reported by a tag-reading backend for a single file.
///
/// The message is whatever the backend produced; callers only display it.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct MetadataReadError {
    message: String,
}

impl MetadataReadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Recoverable per-file errors. Any of these skips the file and leaves it
/// at its original source path; the run continues with the next file.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("cannot read tags: {0}")]
    Metadata(#[from] MetadataReadError),

    #[error("failed to create directory '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("a file named '{}' already exists at the destination", .0.display())]
    MoveConflict(PathBuf),

    #[error("failed to move file to '{}': {source}", .dest.display())]
    Move {
        dest: PathBuf,
        #[source]
        source: io::Error,
    },
}
