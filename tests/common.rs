use std::{
	fs::{metadata, read},
	os::unix::fs::PermissionsExt,
	path::Path,
	process::{Command, Output},
};

/// Verifies successful file creation and its exact content.
pub fn verify_file_equals(testfile: &Path, contents: &[u8]) {
	assert!(testfile.exists());
	let file_content = read(testfile).unwrap();
	assert_eq!(file_content, contents);
}

/// Verifies that a file carries owner read/write permissions and nothing else.
pub fn verify_owner_rw(testfile: &Path) {
	let mode = metadata(testfile).unwrap().permissions().mode();
	assert_eq!(mode & 0o7777, 0o600);
}

/// Runs one of the demo binaries inside `dir` with a scrubbed environment.
/// Returns the captured output for the caller to inspect.
pub fn run_demo(exe: &str, dir: &Path, args: &[&str]) -> Output {
	println!("Launching {exe} in {}", dir.display());
	Command::new(exe)
		.args(args)
		.current_dir(dir)
		// Logging and path overrides leaking in from the parent would make
		// runs non-reproducible.
		.env_remove("RUST_LOG")
		.env_remove("FDWRITE_OUTPUT_PATH")
		.env_remove("FDWRITE_HELLO_PATH")
		.output()
		.expect("failed to execute demo binary")
}
