//! file_write: Overwrite or append text to a file
//!
//! Creates the file if absent. Fails if the parent directory does not exist.
//! A failed write is not rolled back; the file keeps whatever reached disk.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use super::error::{FileOpError, Result};

/// How `file_write` treats existing content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate existing content first
    Overwrite,
    /// Keep existing content and write after it
    Append,
}

impl WriteMode {
    pub fn from_append_flag(append: bool) -> Self {
        if append {
            WriteMode::Append
        } else {
            WriteMode::Overwrite
        }
    }
}

/// Write content to a file
///
/// The handle is buffered and flushed before returning, and closed on every
/// exit path when it goes out of scope.
///
/// # Arguments
/// * `path` - Path to the file to write
/// * `content` - Content to write (UTF-8), written as-is
/// * `mode` - Overwrite or append
///
/// # Examples
/// ```ignore
/// use fileops::file_ops::{file_write, WriteMode};
///
/// file_write("output.txt", "Hello, World!", WriteMode::Overwrite)?;
/// file_write("output.txt", "\nMore", WriteMode::Append)?;
/// ```
pub fn file_write(path: impl AsRef<Path>, content: &str, mode: WriteMode) -> Result<()> {
    let path = path.as_ref();
    let to_op_error = |e| FileOpError::from_io(path, e);

    let mut options = OpenOptions::new();
    options.create(true);
    match mode {
        WriteMode::Overwrite => options.write(true).truncate(true),
        WriteMode::Append => options.append(true),
    };

    let file = options.open(path).map_err(to_op_error)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes()).map_err(to_op_error)?;
    writer.flush().map_err(to_op_error)?;

    debug!(path = %path.display(), ?mode, bytes = content.len(), "wrote file");
    Ok(())
}
