//! Line Counting Library
//!
//! This library crawls a directory tree into memory, skipping hidden entries,
//! and counts newline bytes across every file it found using chunked parallel
//! workers with first-error cancellation.

pub mod cli;
pub mod models;
pub mod services;

pub use models::{CrawlResult, LineTotals, RunReport};
pub use services::counter::{CountOptions, DEFAULT_CHUNK_SIZE};
pub use services::crawl::StrategyKind;

use std::path::Path;
use std::result;
use std::time::SystemTime;

/// Custom error type for the library
#[derive(Debug)]
pub enum Error {
    InvalidInput(String),
    DirectoryAccess {
        path: String,
        source: std::io::Error,
    },
    FileRead {
        path: String,
        source: std::io::Error,
    },
    NoFiles {
        root: String,
    },
    Cancelled,
    System(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Error::DirectoryAccess { path, source } => {
                write!(f, "failed to read directory {path}: {source}")
            }
            Error::FileRead { path, source } => {
                write!(f, "failed to count lines in {path}: {source}")
            }
            Error::NoFiles { root } => write!(f, "No files found in {root}"),
            Error::Cancelled => write!(f, "line counting cancelled after another worker failed"),
            Error::System(msg) => write!(f, "System error: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::DirectoryAccess { source, .. } | Error::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Options for a full scan: traversal backend plus counting parameters
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    pub strategy_override: Option<StrategyKind>,
    pub count: CountOptions,
}

/// Summary result from a scan operation
#[derive(Debug)]
pub struct Summary {
    pub root: String,
    pub crawl: CrawlResult,
    pub totals: LineTotals,
    pub chunk_size: usize,
    pub strategy: StrategyKind,
    pub started_at: SystemTime,
    pub finished_at: SystemTime,
}

impl Summary {
    /// Flatten the summary into the user-facing report.
    #[must_use]
    pub fn report(&self, target: &str) -> RunReport {
        RunReport {
            target_directory: target.to_string(),
            iterations: self.totals.iterations,
            chunk_size: self.chunk_size,
            total_directories: self.crawl.directories.len(),
            total_files: self.crawl.files.len(),
            total_lines: self.totals.total_lines,
            elapsed: self
                .finished_at
                .duration_since(self.started_at)
                .unwrap_or_default(),
            strategy: self.strategy.to_string(),
        }
    }
}

/// Crawl a directory and count the lines of every file beneath it
///
/// # Arguments
/// * `root` - The root directory to scan
/// * `opts` - Scan options
///
/// # Errors
/// Fails if the root is not a readable directory, if the crawl fails, if no
/// files were found, or if any file could not be counted.
pub fn scan_summary<P: AsRef<Path>>(root: P, opts: &ScanOptions) -> Result<Summary> {
    let root_path = root.as_ref().to_string_lossy().to_string();

    if !root.as_ref().exists() {
        return Err(Error::InvalidInput(format!(
            "Path does not exist: {root_path}"
        )));
    }

    if !root.as_ref().is_dir() {
        return Err(Error::InvalidInput(format!(
            "Path is not a directory: {root_path}"
        )));
    }

    let started_at = SystemTime::now();

    let dispatcher = services::crawl::CrawlDispatcher::for_options(opts);
    let strategy = dispatcher.active_strategy();
    let crawl = dispatcher.crawl(&root)?;

    log::info!(
        "Crawled {root_path}: {} directories, {} files ({strategy})",
        crawl.directories.len(),
        crawl.files.len()
    );

    if crawl.files.is_empty() {
        return Err(Error::NoFiles { root: root_path });
    }

    let totals = services::counter::count_total_lines_with(&crawl.files, &opts.count)?;

    log::info!(
        "Counted {} lines across {} iterations",
        totals.total_lines,
        totals.iterations
    );

    let finished_at = SystemTime::now();

    Ok(Summary {
        root: root_path,
        crawl,
        totals,
        chunk_size: opts.count.chunk_size,
        strategy,
        started_at,
        finished_at,
    })
}
