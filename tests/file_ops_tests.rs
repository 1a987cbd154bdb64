// Integration tests for file operations
// Tests use REAL filesystem — no mocks

use fileops::file_ops::{self, FileOpErrorKind, WriteMode};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_file_create_new_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("create_new.txt");

    let result = file_ops::file_create(&file_path);
    assert!(result.is_ok(), "file_create should succeed for new file");

    assert!(file_path.exists(), "File should exist after creation");
    let read_content = fs::read_to_string(&file_path).expect("Failed to read back");
    assert_eq!(read_content, "", "New file should be empty");
}

#[test]
fn test_file_create_existing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("existing.txt");
    fs::write(&file_path, "Existing content").expect("Failed to write initial content");

    let error = file_ops::file_create(&file_path).expect_err("second create must fail");
    assert_eq!(error.kind(), FileOpErrorKind::AlreadyExists);

    // Original content should be unchanged
    let read_content = fs::read_to_string(&file_path).expect("Failed to read back");
    assert_eq!(read_content, "Existing content");
}

#[test]
fn test_file_create_missing_parent() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("nonexistent").join("file.txt");

    let error = file_ops::file_create(&file_path).expect_err("parent dirs are not created");
    assert_eq!(error.kind(), FileOpErrorKind::NotFound);
    assert!(!file_path.exists());
}

#[test]
fn test_file_delete_existing_and_missing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("doomed.txt");
    fs::write(&file_path, "bye").expect("Failed to write");

    assert!(file_ops::file_delete(&file_path).is_ok());
    assert!(!file_ops::file_exists(&file_path));

    let error = file_ops::file_delete(&file_path).expect_err("second delete must fail");
    assert_eq!(error.kind(), FileOpErrorKind::NotFound);
}

#[test]
fn test_file_write_overwrite_truncates() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("overwrite.txt");
    fs::write(&file_path, "Old content that is longer").expect("Failed to write");

    file_ops::file_write(&file_path, "New", WriteMode::Overwrite).expect("write should succeed");

    let read_content = fs::read_to_string(&file_path).expect("Failed to read back");
    assert_eq!(read_content, "New");
}

#[test]
fn test_file_write_append_keeps_content() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("append.txt");

    file_ops::file_write(&file_path, "X", WriteMode::Append).expect("append creates file");
    file_ops::file_write(&file_path, "\nY", WriteMode::Append).expect("append should succeed");

    let read_content = fs::read_to_string(&file_path).expect("Failed to read back");
    assert_eq!(read_content, "X\nY");
}

#[test]
fn test_file_write_missing_parent() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("nonexistent").join("file.txt");

    let result = file_ops::file_write(&file_path, "Content", WriteMode::Overwrite);
    assert!(
        result.is_err(),
        "file_write should fail if parent directory missing"
    );
}

#[test]
fn test_file_read_all_appends_trailing_newline() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("read.txt");
    fs::write(&file_path, "X").expect("Failed to write");

    let content = file_ops::file_read_all(&file_path).expect("read should succeed");
    assert_eq!(content, "X\n");
}

#[test]
fn test_file_read_all_normalizes_crlf() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("crlf.txt");
    fs::write(&file_path, "one\r\ntwo\r\n").expect("Failed to write");

    let content = file_ops::file_read_all(&file_path).expect("read should succeed");
    assert_eq!(content, "one\ntwo\n");
}

#[test]
fn test_file_read_all_empty_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("empty.txt");
    fs::write(&file_path, "").expect("Failed to write");

    let content = file_ops::file_read_all(&file_path).expect("read should succeed");
    assert_eq!(content, "");
}

#[test]
fn test_file_read_missing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("nonexistent.txt");

    let error = file_ops::file_read_all(&file_path).expect_err("missing file should fail");
    assert_eq!(error.kind(), FileOpErrorKind::NotFound);

    let error = file_ops::file_read_lines(&file_path).expect_err("missing file should fail");
    assert_eq!(error.kind(), FileOpErrorKind::NotFound);
}

#[test]
fn test_file_read_lines_in_order() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("lines.txt");
    fs::write(&file_path, "A\nB\nC").expect("Failed to write");

    let lines = file_ops::file_read_lines(&file_path).expect("read should succeed");
    assert_eq!(lines, vec!["A", "B", "C"]);
}

#[test]
fn test_file_read_invalid_utf8() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("binary.bin");
    fs::write(&file_path, b"ok\xff\nnext").expect("Failed to write");

    let error = file_ops::file_read_lines(&file_path).expect_err("invalid UTF-8 should fail");
    assert_eq!(error.kind(), FileOpErrorKind::Io);

    // Whole-content reads replace bad bytes instead of failing
    let content = file_ops::file_read_all(&file_path).expect("lossy read should succeed");
    assert_eq!(content, "ok\u{FFFD}\nnext\n");
}

#[test]
fn test_file_read_lone_carriage_return_ends_line() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("cr.txt");
    fs::write(&file_path, "A\rB").expect("Failed to write");

    let lines = file_ops::file_read_lines(&file_path).expect("read should succeed");
    assert_eq!(lines, vec!["A", "B"]);

    let content = file_ops::file_read_all(&file_path).expect("read should succeed");
    assert_eq!(content, "A\nB\n");
}

#[test]
fn test_file_rename_moves_content() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let old_path = temp_dir.path().join("old.txt");
    let new_path = temp_dir.path().join("new.txt");
    fs::write(&old_path, "payload").expect("Failed to write");

    file_ops::file_rename(&old_path, &new_path).expect("rename should succeed");

    assert!(!old_path.exists(), "Old path should be gone");
    let read_content = fs::read_to_string(&new_path).expect("Failed to read back");
    assert_eq!(read_content, "payload");
}

#[test]
fn test_file_rename_missing_source() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let old_path = temp_dir.path().join("ghost.txt");
    let new_path = temp_dir.path().join("new.txt");

    let error = file_ops::file_rename(&old_path, &new_path).expect_err("rename should fail");
    assert_eq!(error.kind(), FileOpErrorKind::NotFound);
    assert!(!new_path.exists());
}

#[test]
fn test_file_copy_overwrites_destination() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let src = temp_dir.path().join("src.txt");
    let dst = temp_dir.path().join("dst.txt");
    fs::write(&src, "source").expect("Failed to write src");
    fs::write(&dst, "stale destination content").expect("Failed to write dst");

    let bytes = file_ops::file_copy(&src, &dst).expect("copy should succeed");

    assert_eq!(bytes, "source".len() as u64);
    assert_eq!(fs::read_to_string(&dst).expect("Failed to read dst"), "source");
    assert_eq!(fs::read_to_string(&src).expect("Failed to read src"), "source");
}

#[test]
fn test_file_copy_missing_source() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let src = temp_dir.path().join("ghost.txt");
    let dst = temp_dir.path().join("dst.txt");

    let error = file_ops::file_copy(&src, &dst).expect_err("copy should fail");
    assert_eq!(error.kind(), FileOpErrorKind::NotFound);
}

#[test]
fn test_file_copy_onto_itself_keeps_content() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("precious.txt");
    fs::write(&path, "precious").expect("Failed to write");

    let bytes = file_ops::file_copy(&path, &path).expect("self copy should succeed");
    assert_eq!(bytes, "precious".len() as u64);
    assert_eq!(fs::read_to_string(&path).expect("Failed to read back"), "precious");

    // Same file reached through a different spelling of the path
    let dotted = temp_dir.path().join(".").join("precious.txt");
    file_ops::file_copy(&path, &dotted).expect("self copy should succeed");
    assert_eq!(fs::read_to_string(&path).expect("Failed to read back"), "precious");
}
