//! file_read: Read a file as text, whole or line by line
//!
//! Both readers treat `\n`, `\r\n` and a lone `\r` as line terminators.
//! `file_read_lines` rejects invalid UTF-8; `file_read_all` replaces it
//! with U+FFFD.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use super::error::{FileOpError, Result};

/// Read all lines of a file, separators stripped, in file order
///
/// A trailing line without a terminator still counts; an empty file yields
/// no lines. Fails on invalid UTF-8.
///
/// # Examples
/// ```ignore
/// use fileops::file_ops::file_read_lines;
///
/// let lines = file_read_lines("test.txt")?;
/// ```
pub fn file_read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| FileOpError::from_io(path, e))?;
    let text = String::from_utf8(bytes).map_err(|e| {
        FileOpError::from_io(path, io::Error::new(io::ErrorKind::InvalidData, e))
    })?;

    let lines = split_lines(&text);
    debug!(path = %path.display(), lines = lines.len(), "read lines");
    Ok(lines)
}

/// Read a whole file, re-joining its lines with `\n`
///
/// Every line gets a trailing `\n`, including the last one, so `"X"` on disk
/// reads back as `"X\n"` and `\r\n` or `\r` endings come back as `\n`.
/// Invalid UTF-8 sequences are replaced, never rejected.
///
/// # Examples
/// ```ignore
/// use fileops::file_ops::file_read_all;
///
/// let content = file_read_all("test.txt")?;
/// ```
pub fn file_read_all(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| FileOpError::from_io(path, e))?;
    let lines = split_lines(&String::from_utf8_lossy(&bytes));

    let capacity = lines.iter().map(|line| line.len() + 1).sum();
    let mut content = String::with_capacity(capacity);
    for line in &lines {
        content.push_str(line);
        content.push('\n');
    }

    debug!(path = %path.display(), lines = lines.len(), "read file");
    Ok(content)
}

fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;

    while let Some(end) = rest.find(['\n', '\r']) {
        lines.push(rest[..end].to_string());
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
    }
    if !rest.is_empty() {
        lines.push(rest.to_string());
    }

    lines
}
