//! fileops: Path-based file helpers
//!
//! Thin wrappers over the host filesystem for create, delete, write,
//! read, rename and copy, plus a demonstration driver.

pub mod config;
pub mod demo;
pub mod file_ops;
pub mod logging;

// Re-export file operations for convenience
pub use file_ops::{
    file_copy, file_create, file_delete, file_exists, file_read_all, file_read_lines,
    file_rename, file_write, CollectingSink, Diagnostic, DiagnosticSink, FileOpError,
    FileOpErrorKind, FileOperations, TracingSink, WriteMode,
};

pub use config::DemoConfig;
pub use demo::{run_demo, DemoReport};
