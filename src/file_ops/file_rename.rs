//! file_rename: Move a file to a new path
//!
//! Follows host semantics for an existing target: replaced on Unix,
//! may fail elsewhere.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::error::{FileOpError, Result};

/// Rename `from` to `to`
///
/// Errors are attributed to the source path.
pub fn file_rename(from: impl AsRef<Path>, to: impl AsRef<Path>) -> Result<()> {
    let (from, to) = (from.as_ref(), to.as_ref());
    fs::rename(from, to).map_err(|e| FileOpError::from_io(from, e))?;

    debug!(from = %from.display(), to = %to.display(), "renamed file");
    Ok(())
}
