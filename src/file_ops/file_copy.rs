//! file_copy: Copy a file, replacing any existing destination

use std::fs;
use std::path::Path;

use tracing::debug;

use super::error::{FileOpError, Result};

/// Copy `from` to `to`
///
/// An existing file at `to` is silently overwritten. Copying a file onto
/// itself leaves it untouched.
///
/// # Returns
/// * `Ok(u64)` - Number of bytes copied (the file size for a self-copy)
/// * `Err(FileOpError)` - Source missing or I/O failure, attributed to `from`
pub fn file_copy(from: impl AsRef<Path>, to: impl AsRef<Path>) -> Result<u64> {
    let (from, to) = (from.as_ref(), to.as_ref());

    // fs::copy truncates `to` before reading `from`
    if is_same_file(from, to) {
        let len = fs::metadata(from)
            .map_err(|e| FileOpError::from_io(from, e))?
            .len();
        debug!(path = %from.display(), "copy onto itself skipped");
        return Ok(len);
    }

    let bytes = fs::copy(from, to).map_err(|e| FileOpError::from_io(from, e))?;

    debug!(from = %from.display(), to = %to.display(), bytes, "copied file");
    Ok(bytes)
}

fn is_same_file(from: &Path, to: &Path) -> bool {
    match (fs::canonicalize(from), fs::canonicalize(to)) {
        (Ok(from), Ok(to)) => from == to,
        _ => false,
    }
}
