//! Contract test for JSON output shape

use lcount::RunReport;
use lcount::cli::output::format_json;
use std::time::Duration;

#[test]
fn test_json_output_shape() {
    let report = RunReport {
        target_directory: "/srv/repo".to_string(),
        iterations: 3,
        chunk_size: 1000,
        total_directories: 12,
        total_files: 3456,
        total_lines: 789_000,
        elapsed: Duration::from_micros(1500),
        strategy: "posix".to_string(),
    };

    let json = format_json(&report).expect("serialize report");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    let object = value.as_object().expect("top-level object");

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        [
            "chunk_size",
            "elapsed_ms",
            "iterations",
            "strategy",
            "target_directory",
            "total_directories",
            "total_files",
            "total_lines",
        ]
    );

    assert_eq!(value["target_directory"], "/srv/repo");
    assert_eq!(value["total_files"], 3456);
    assert_eq!(value["total_lines"], 789_000);
    assert!((value["elapsed_ms"].as_f64().unwrap() - 1.5).abs() < 1e-9);
}
