//! No-overwrite file placement.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{io_err, RestoreError};

/// Outcome of an individual file placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceResult {
    /// File was copied to its destination.
    Placed { path: PathBuf },
    /// Destination already exists — nothing was copied.
    Skipped { path: PathBuf },
}

impl PlaceResult {
    pub fn path(&self) -> &Path {
        match self {
            PlaceResult::Placed { path } | PlaceResult::Skipped { path } => path,
        }
    }
}

/// Copy `source` to `dest_dir/file_name`, creating `dest_dir` (and parents)
/// if absent.
///
/// An existing destination file is left untouched and reported as
/// [`PlaceResult::Skipped`]; repeated runs with the same inputs are
/// idempotent. A missing source errors before any directory is created.
pub fn place_file(
    dest_dir: &Path,
    source: &Path,
    file_name: &str,
) -> Result<PlaceResult, RestoreError> {
    if !source.exists() {
        return Err(io_err(
            source,
            std::io::Error::new(ErrorKind::NotFound, "staged file not found"),
        ));
    }

    let dest = dest_dir.join(file_name);
    if dest.exists() {
        tracing::debug!("exists, skipping: {}", dest.display());
        return Ok(PlaceResult::Skipped { path: dest });
    }

    std::fs::create_dir_all(dest_dir).map_err(|e| io_err(dest_dir, e))?;
    std::fs::copy(source, &dest).map_err(|e| io_err(&dest, e))?;
    tracing::info!("placed: {}", dest.display());
    Ok(PlaceResult::Placed { path: dest })
}
