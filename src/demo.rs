//! Demonstration driver
//!
//! Runs the fixed sequence create → write → append → read-all → read-lines
//! → rename → copy → delete ×2 inside a root directory and records one
//! human-readable step per action. Causes of failure are never shown here;
//! they go to the facade's diagnostic sink.

use std::cell::Cell;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::file_ops::{Diagnostic, DiagnosticSink, FileOperations};

pub const FILE_NAME: &str = "example.txt";
pub const RENAMED_FILE_NAME: &str = "renamed_example.txt";
pub const COPY_FILE_NAME: &str = "copy_example.txt";
pub const CONTENT: &str = "Hello, File Handling!";
pub const MORE_CONTENT: &str = "\nAppending more content.";

/// Demo actions, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DemoAction {
    Create,
    Write,
    Append,
    ReadAll,
    ReadLines,
    Rename,
    Copy,
    Delete,
}

/// Outcome of one demo action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoStep {
    pub action: DemoAction,
    pub success: bool,
    pub message: String,
}

/// Everything the demo observed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub steps: Vec<DemoStep>,
    /// Result of read-all (`""` on failure)
    pub content: String,
    /// Result of read-lines (`None` on failure)
    pub lines: Option<Vec<String>>,
}

impl DemoReport {
    pub fn all_succeeded(&self) -> bool {
        self.steps.iter().all(|step| step.success)
    }

    fn record(&mut self, action: DemoAction, success: bool, message: String) {
        self.steps.push(DemoStep {
            action,
            success,
            message,
        });
    }

    /// Render the report the way the demo prints it
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for step in &self.steps {
            match step.action {
                DemoAction::ReadAll => {
                    out.push_str("File content:\n");
                    out.push_str(&self.content);
                    out.push('\n');
                }
                DemoAction::ReadLines => {
                    out.push_str("File content (line by line):\n");
                    for line in self.lines.iter().flatten() {
                        out.push_str(line);
                        out.push('\n');
                    }
                }
                _ => {
                    out.push_str(&step.message);
                    out.push('\n');
                }
            }
        }
        out
    }
}

/// Forwards to the caller's sink and remembers whether the current step failed
struct StepSink<'a, S> {
    inner: &'a S,
    failed: Cell<bool>,
}

impl<'a, S: DiagnosticSink> StepSink<'a, S> {
    fn new(inner: &'a S) -> Self {
        Self {
            inner,
            failed: Cell::new(false),
        }
    }

    /// `true` if nothing was reported since the last call
    fn step_succeeded(&self) -> bool {
        !self.failed.replace(false)
    }
}

impl<S: DiagnosticSink> DiagnosticSink for StepSink<'_, S> {
    fn report(&self, diagnostic: Diagnostic) {
        self.failed.set(true);
        self.inner.report(diagnostic);
    }
}

/// Run the demonstration sequence under `root`
///
/// A step counts as succeeded when it reported nothing to the sink.
pub fn run_demo<S: DiagnosticSink>(ops: &FileOperations<S>, root: &Path) -> DemoReport {
    let file = root.join(FILE_NAME);
    let renamed = root.join(RENAMED_FILE_NAME);
    let copy = root.join(COPY_FILE_NAME);
    let step = StepSink::new(ops.sink());
    let ops = FileOperations::with_sink(&step);
    let mut report = DemoReport::default();

    info!(root = %root.display(), "starting file operations demo");

    ops.create(&file);
    let created = step.step_succeeded();
    let message = if created {
        format!("File created: {}", FILE_NAME)
    } else {
        format!("File already exists or failed to create: {}", FILE_NAME)
    };
    report.record(DemoAction::Create, created, message);

    ops.write(&file, CONTENT, false);
    report.record(
        DemoAction::Write,
        step.step_succeeded(),
        format!("Written to file: {}", FILE_NAME),
    );

    ops.write(&file, MORE_CONTENT, true);
    report.record(
        DemoAction::Append,
        step.step_succeeded(),
        format!("Appended to file: {}", FILE_NAME),
    );

    report.content = ops.read_all(&file);
    report.record(
        DemoAction::ReadAll,
        step.step_succeeded(),
        format!("File content:\n{}", report.content),
    );

    report.lines = ops.read_lines(&file);
    report.record(
        DemoAction::ReadLines,
        step.step_succeeded(),
        "File content (line by line):".to_string(),
    );

    ops.rename(&file, &renamed);
    let renamed_ok = step.step_succeeded();
    let message = if renamed_ok {
        format!("File renamed to: {}", RENAMED_FILE_NAME)
    } else {
        "Failed to rename file.".to_string()
    };
    report.record(DemoAction::Rename, renamed_ok, message);

    ops.copy(&renamed, &copy);
    let copied = step.step_succeeded();
    let message = if copied {
        format!("File copied to: {}", COPY_FILE_NAME)
    } else {
        "Failed to copy file.".to_string()
    };
    report.record(DemoAction::Copy, copied, message);

    for name in [RENAMED_FILE_NAME, COPY_FILE_NAME] {
        ops.delete(root.join(name));
        let deleted = step.step_succeeded();
        let message = if deleted {
            format!("File deleted: {}", name)
        } else {
            format!("Failed to delete file: {}", name)
        };
        report.record(DemoAction::Delete, deleted, message);
    }

    info!(
        steps = report.steps.len(),
        all_succeeded = report.all_succeeded(),
        "file operations demo finished"
    );
    report
}
