//! Integration tests driving the lcount binary

use crate::fixtures::create_lines_fixture;
use std::process::{Command, Output};
use tempfile::TempDir;

fn lcount(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lcount"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute lcount")
}

#[test]
fn test_help() {
    let output = lcount(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Line Count CLI"));
    assert!(stdout.contains("--chunk-size"));
}

#[test]
fn test_version() {
    let output = lcount(&["--version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with(&format!("lcount {}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_wrong_argument_count_is_usage_error() {
    let cases: [&[&str]; 2] = [&[], &["a", "b"]];
    for args in cases {
        let output = lcount(args);
        assert_eq!(output.status.code(), Some(2), "args {args:?}");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Not exactly 1 argument"), "{stderr}");
    }
}

#[test]
fn test_missing_directory_fails() {
    let output = lcount(&["/definitely/does/not/exist/xyz123"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to chdir"), "{stderr}");
}

#[test]
fn test_empty_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().to_string_lossy().into_owned();
    let output = lcount(&[target.as_str()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No files found"), "{stderr}");
}

#[test]
fn test_unknown_strategy_is_usage_error() {
    let temp_dir = TempDir::new().unwrap();
    create_lines_fixture(temp_dir.path()).unwrap();

    let target = temp_dir.path().to_string_lossy().into_owned();
    let output = lcount(&[target.as_str(), "--strategy", "ntfs"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_text_report() {
    let temp_dir = TempDir::new().unwrap();
    create_lines_fixture(temp_dir.path()).unwrap();
    let target = temp_dir.path().to_string_lossy().into_owned();

    let output = lcount(&[target.as_str()]);

    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("Target directory:               {target}\n")));
    assert!(stdout.contains("Iterations:                     1\n"));
    assert!(stdout.contains("Chunk Size:                     100000\n"));
    assert!(stdout.contains("Total number of directories:    1\n"));
    assert!(stdout.contains("Total number of files:          2\n"));
    assert!(stdout.contains("Total lines of code:            8\n"));
    assert!(stdout.contains("Total time spent:               "));
}

#[test]
fn test_json_report() {
    let temp_dir = TempDir::new().unwrap();
    create_lines_fixture(temp_dir.path()).unwrap();
    let target = temp_dir.path().to_string_lossy().into_owned();

    let output = lcount(&[target.as_str(), "--json", "--chunk-size", "1", "--workers", "2"]);

    assert!(output.status.success(), "{output:?}");
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["target_directory"], target.as_str());
    assert_eq!(value["iterations"], 2);
    assert_eq!(value["chunk_size"], 1);
    assert_eq!(value["total_lines"], 8);
}
