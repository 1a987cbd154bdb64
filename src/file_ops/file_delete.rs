//! file_delete: Remove a file

use std::fs;
use std::path::Path;

use tracing::debug;

use super::error::{FileOpError, Result};

/// Delete the file at `path`
///
/// # Returns
/// * `Ok(())` - The file existed and was removed
/// * `Err(FileOpError::NotFound)` - Nothing to delete
/// * `Err(FileOpError)` - Removal failed (permissions, directory, ...)
pub fn file_delete(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::remove_file(path).map_err(|e| FileOpError::from_io(path, e))?;

    debug!(path = %path.display(), "deleted file");
    Ok(())
}

/// Returns `true` if something currently exists at `path`
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}
