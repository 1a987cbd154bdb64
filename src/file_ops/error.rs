//! Error type shared by all file operations
//!
//! Every failure carries the path it concerns and a coarse kind, so callers
//! can branch on the cause instead of parsing messages.

use serde::Serialize;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Cause category of a failed file operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FileOpErrorKind {
    NotFound,
    PermissionDenied,
    AlreadyExists,
    Io,
}

/// Errors that can occur during file operations
#[derive(Error, Debug)]
pub enum FileOpError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("File already exists: {0}")]
    AlreadyExists(String),

    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Result type for file operations
pub type Result<T> = std::result::Result<T, FileOpError>;

impl FileOpError {
    /// Classify an I/O error raised while operating on `path`
    pub fn from_io(path: &Path, error: io::Error) -> Self {
        let path = path.display().to_string();
        match error.kind() {
            io::ErrorKind::NotFound => FileOpError::NotFound(path),
            io::ErrorKind::PermissionDenied => FileOpError::PermissionDenied(path),
            io::ErrorKind::AlreadyExists => FileOpError::AlreadyExists(path),
            _ => FileOpError::Io {
                path,
                source: error,
            },
        }
    }

    pub fn kind(&self) -> FileOpErrorKind {
        match self {
            FileOpError::NotFound(_) => FileOpErrorKind::NotFound,
            FileOpError::PermissionDenied(_) => FileOpErrorKind::PermissionDenied,
            FileOpError::AlreadyExists(_) => FileOpErrorKind::AlreadyExists,
            FileOpError::Io { .. } => FileOpErrorKind::Io,
        }
    }

    /// Path the failed operation was acting on
    pub fn path(&self) -> &str {
        match self {
            FileOpError::NotFound(path)
            | FileOpError::PermissionDenied(path)
            | FileOpError::AlreadyExists(path)
            | FileOpError::Io { path, .. } => path,
        }
    }
}
