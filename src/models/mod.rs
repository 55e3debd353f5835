//! Data models for crawl results, line totals, and the run report

use serde::{Serialize, Serializer};
use std::path::PathBuf;
use std::time::Duration;

/// Every non-hidden entry found beneath a crawl root, as absolute paths
///
/// Paths keep their raw OS encoding; names that are not valid UTF-8 must
/// still reopen to the same file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlResult {
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

impl CrawlResult {
    /// Total number of entries (directories plus files).
    #[must_use]
    pub fn len(&self) -> usize {
        self.directories.len() + self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.directories.is_empty() && self.files.is_empty()
    }
}

/// Outcome of a successful counting run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineTotals {
    pub total_lines: u64,
    pub iterations: usize,
}

/// User-facing report printed at the end of a run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub target_directory: String,
    pub iterations: usize,
    pub chunk_size: usize,
    pub total_directories: usize,
    pub total_files: usize,
    pub total_lines: u64,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
    pub strategy: String,
}

fn serialize_millis<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64() * 1000.0)
}
