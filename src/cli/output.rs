//! Output formatting for CLI

use crate::models::RunReport;
use std::fmt::Write;

/// Render the report as the fixed-label text block.
#[must_use]
pub fn format_text(report: &RunReport) -> String {
    let mut out = String::new();
    out.push('\n');
    let rows: [(&str, String); 7] = [
        ("Target directory:", report.target_directory.clone()),
        ("Iterations:", report.iterations.to_string()),
        ("Chunk Size:", report.chunk_size.to_string()),
        (
            "Total number of directories:",
            report.total_directories.to_string(),
        ),
        ("Total number of files:", report.total_files.to_string()),
        ("Total lines of code:", report.total_lines.to_string()),
        ("Total time spent:", format!("{:?}", report.elapsed)),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "{label:<32}{value}");
    }
    out
}

/// Render the report as pretty-printed JSON.
pub fn format_json(report: &RunReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
