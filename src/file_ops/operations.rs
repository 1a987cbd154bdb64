//! FileOperations: boolean/empty-result facade over the file operations
//!
//! Never returns an error. Each failure becomes `false`, `""`, `None` or
//! nothing, and is reported to the sink.

use std::path::Path;

use super::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use super::error::Result;
use super::{
    file_copy, file_create, file_delete, file_exists, file_read_all, file_read_lines,
    file_rename, file_write, WriteMode,
};

/// Stateless file helpers with a swallow-and-report failure policy
#[derive(Debug, Default, Clone)]
pub struct FileOperations<S = TracingSink> {
    sink: S,
}

impl FileOperations<TracingSink> {
    /// Facade reporting failures as `tracing` warnings
    pub fn new() -> Self {
        Self { sink: TracingSink }
    }
}

impl<S: DiagnosticSink> FileOperations<S> {
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// `true` if a new, previously absent file was created
    pub fn create(&self, path: impl AsRef<Path>) -> bool {
        self.succeeded("create", file_create(path))
    }

    /// `true` if the file existed and was removed
    pub fn delete(&self, path: impl AsRef<Path>) -> bool {
        self.succeeded("delete", file_delete(path))
    }

    /// Overwrite (`append == false`) or append; no rollback on failure
    pub fn write(&self, path: impl AsRef<Path>, content: &str, append: bool) {
        let mode = WriteMode::from_append_flag(append);
        self.succeeded("write", file_write(path, content, mode));
    }

    /// Whole content with `\n` after every line, or `""` on failure
    pub fn read_all(&self, path: impl AsRef<Path>) -> String {
        self.checked("read_all", file_read_all(path))
            .unwrap_or_default()
    }

    /// Lines in file order, or `None` on failure
    pub fn read_lines(&self, path: impl AsRef<Path>) -> Option<Vec<String>> {
        self.checked("read_lines", file_read_lines(path))
    }

    pub fn rename(&self, path: impl AsRef<Path>, new_path: impl AsRef<Path>) -> bool {
        self.succeeded("rename", file_rename(path, new_path))
    }

    /// Replace-on-copy: an existing `new_path` is overwritten
    pub fn copy(&self, path: impl AsRef<Path>, new_path: impl AsRef<Path>) -> bool {
        self.succeeded("copy", file_copy(path, new_path))
    }

    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        file_exists(path)
    }

    fn checked<T>(&self, operation: &'static str, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.sink.report(Diagnostic::new(operation, &error));
                None
            }
        }
    }

    fn succeeded<T>(&self, operation: &'static str, result: Result<T>) -> bool {
        self.checked(operation, result).is_some()
    }
}
