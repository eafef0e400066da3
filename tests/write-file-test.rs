mod common;

use std::{fs, os::unix::fs::PermissionsExt};

use common::{run_demo, verify_file_equals, verify_owner_rw};

const WRITE_FILE_BIN: &str = env!("CARGO_BIN_EXE_write_file");

#[test]
fn new_file_test() {
	let dir = tempfile::tempdir().unwrap();

	let output = run_demo(WRITE_FILE_BIN, dir.path(), &[]);

	assert!(output.status.success());
	assert!(output.stdout.is_empty());
	assert!(output.stderr.is_empty());
	verify_file_equals(&dir.path().join("output.txt"), b"Great!\n");
	verify_owner_rw(&dir.path().join("output.txt"));
}

#[test]
fn rerun_truncates_test() {
	let dir = tempfile::tempdir().unwrap();
	let target = dir.path().join("output.txt");
	fs::write(&target, "x".repeat(64)).unwrap();

	let output = run_demo(WRITE_FILE_BIN, dir.path(), &[]);

	assert!(output.status.success());
	verify_file_equals(&target, b"Great!\n");
}

#[test]
fn explicit_path_test() {
	let dir = tempfile::tempdir().unwrap();

	let output = run_demo(WRITE_FILE_BIN, dir.path(), &["renamed.txt"]);

	assert!(output.status.success());
	verify_file_equals(&dir.path().join("renamed.txt"), b"Great!\n");
	// The default target must not appear when a path is given.
	assert!(!dir.path().join("output.txt").exists());
}

#[test]
fn custom_mode_test() {
	let dir = tempfile::tempdir().unwrap();
	let target = dir.path().join("output.txt");

	let output = run_demo(WRITE_FILE_BIN, dir.path(), &["--mode", "700"]);

	assert!(output.status.success());
	verify_file_equals(&target, b"Great!\n");
	let mode = fs::metadata(&target).unwrap().permissions().mode();
	assert_eq!(mode & 0o7777, 0o700);
}

#[test]
fn creation_failure_test() {
	let dir = tempfile::tempdir().unwrap();

	let output = run_demo(WRITE_FILE_BIN, dir.path(), &["absent/output.txt"]);

	assert_eq!(output.status.code(), Some(1));
	assert!(output.stdout.is_empty());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert_eq!(stderr.lines().count(), 1);
	assert!(stderr.starts_with("write_file: failed to create absent/output.txt"));
	assert!(!dir.path().join("absent").join("output.txt").exists());
}

#[test]
fn invalid_mode_test() {
	let dir = tempfile::tempdir().unwrap();

	let output = run_demo(WRITE_FILE_BIN, dir.path(), &["--mode", "98"]);

	// Argument errors are clap's to report, distinct from a failed run.
	assert_eq!(output.status.code(), Some(2));
	assert!(!dir.path().join("output.txt").exists());
}
