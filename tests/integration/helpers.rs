//! Shared helpers for CLI integration tests.

use std::process::Command;

/// Run the cclight binary and capture output.
///
/// `NO_COLOR` is set so assertions don't have to account for escape
/// codes (the child's stdout is a pipe anyway, which also disables
/// colors).
pub fn run_cclight(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_cclight"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute cclight");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Write an executable shell script that stands in for the external
/// parser. Returns the tempdir (keep it alive) and the script path.
#[cfg(unix)]
pub fn stub_parser(body: &str) -> (tempfile::TempDir, String) {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::TempDir::new().expect("tempdir");
    let path = dir.path().join("fake-parser.sh");
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("write stub");

    let mut perms = std::fs::metadata(&path).expect("stub metadata").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("chmod stub");

    let path_str = path.to_string_lossy().into_owned();
    (dir, path_str)
}
