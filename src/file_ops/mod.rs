//! File operations: create, delete, write, read, rename, copy
//!
//! Two layers over the REAL filesystem:
//! - free functions returning `Result<_, FileOpError>` with a cause kind
//! - `FileOperations`, which swallows failures into `false`/`""`/`None`
//!   and reports them to a `DiagnosticSink`

mod diagnostics;
mod error;
mod file_copy;
mod file_create;
mod file_delete;
mod file_read;
mod file_rename;
mod file_write;
mod operations;

pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, TracingSink};
pub use error::{FileOpError, FileOpErrorKind, Result};
pub use file_copy::file_copy;
pub use file_create::file_create;
pub use file_delete::{file_delete, file_exists};
pub use file_read::{file_read_all, file_read_lines};
pub use file_rename::file_rename;
pub use file_write::{file_write, WriteMode};
pub use operations::FileOperations;
