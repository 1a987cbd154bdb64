//! file_create: Create an empty file if not exists
//!
//! Fails if the file already exists (no truncation).
//! Parent directories are NOT created.

use std::fs::OpenOptions;
use std::path::Path;

use tracing::debug;

use super::error::{FileOpError, Result};

/// Create a new, empty file
///
/// # Arguments
/// * `path` - Path to the file to create
///
/// # Returns
/// * `Ok(())` - A previously absent file now exists
/// * `Err(FileOpError::AlreadyExists)` - Something already lives at `path`
/// * `Err(FileOpError)` - Creation failed (missing parent, permissions, ...)
///
/// # Examples
/// ```ignore
/// use fileops::file_ops::file_create;
/// use std::path::Path;
///
/// file_create(Path::new("new.txt"))?;
/// ```
pub fn file_create(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    // create_new checks existence and creates in one syscall
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| FileOpError::from_io(path, e))?;

    debug!(path = %path.display(), "created file");
    Ok(())
}
