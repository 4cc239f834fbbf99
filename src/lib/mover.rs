use crate::error::FileError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Move `file` into `dest_dir`, keeping its original filename.
///
/// Refuses to overwrite: an existing file of the same name at the
/// destination is a `MoveConflict` and the source stays where it is.
pub fn move_into(file: &Path, dest_dir: &Path) -> Result<PathBuf, FileError> {
    let file_name = file.file_name().ok_or_else(|| FileError::Move {
        dest: dest_dir.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidInput, "source file has no filename"),
    })?;

    let dest = dest_dir.join(file_name);
    if dest.exists() {
        return Err(FileError::MoveConflict(dest));
    }

    fs::rename(file, &dest).map_err(|source| FileError::Move {
        dest: dest.clone(),
        source,
    })?;

    debug!(from = %file.display(), to = %dest.display(), "moved");
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::TempDir;

    #[test]
    fn test_move_into_relocates_and_removes_source() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let source = temp_dir.path().join("track.mp3");
        let dest_dir = temp_dir.path().join("album");
        fs::write(&source, b"audio")?;
        fs::create_dir(&dest_dir)?;

        let dest = move_into(&source, &dest_dir)?;

        assert_eq!(dest, dest_dir.join("track.mp3"));
        assert!(dest.exists());
        assert!(!source.exists());

        Ok(())
    }

    #[test]
    fn test_move_into_conflict_keeps_both_files() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let source = temp_dir.path().join("track.mp3");
        let dest_dir = temp_dir.path().join("album");
        fs::write(&source, b"new audio")?;
        fs::create_dir(&dest_dir)?;
        fs::write(dest_dir.join("track.mp3"), b"already here")?;

        let result = move_into(&source, &dest_dir);

        assert!(matches!(result, Err(FileError::MoveConflict(_))));
        assert!(source.exists());
        assert_eq!(fs::read(dest_dir.join("track.mp3"))?, b"already here");

        Ok(())
    }

    #[test]
    fn test_move_into_missing_dest_dir_is_an_io_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let source = temp_dir.path().join("track.mp3");
        fs::write(&source, b"audio")?;

        let result = move_into(&source, &temp_dir.path().join("nowhere"));

        assert!(matches!(result, Err(FileError::Move { .. })));
        assert!(source.exists());

        Ok(())
    }
}
