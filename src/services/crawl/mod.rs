//! Tree crawler and backend selection.
//!
//! The crawler walks a root directory depth-first and materializes every
//! non-hidden entry into a [`CrawlResult`]. Walking is path-based: absolute
//! paths are carried explicitly and the process working directory is never
//! touched. Pending directories live on an explicit stack, so tree depth is
//! bounded by memory rather than by the call stack.
//!
//! Invariants shared by every backend:
//!
//! - Entries whose name starts with `.` are skipped and never descended into.
//! - Each reachable entry is reported exactly once, directories pre-order.
//! - Any listing failure aborts the whole crawl; no partial result escapes.

pub mod portable;
pub mod posix;
pub mod strategy;

use crate::models::CrawlResult;
use crate::{Error, Result, ScanOptions};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use strategy::CrawlStrategy;

/// Enumeration of available traversal backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    /// `std::fs::read_dir` traversal, available on every platform.
    #[default]
    Portable,
    /// POSIX traversal leveraging `openat`/`getdents64` through `rustix`.
    Posix,
}

impl StrategyKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Portable => "portable",
            StrategyKind::Posix => "posix",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "portable" | "std" => Some(StrategyKind::Portable),
            "posix" | "unix" => Some(StrategyKind::Posix),
            _ => None,
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        StrategyKind::from_label(s).ok_or_else(|| format!("unknown strategy '{s}'"))
    }
}

/// Return the preferred backend for the current host.
#[must_use]
pub fn default_strategy() -> StrategyKind {
    if posix::PosixCrawl::is_supported() {
        StrategyKind::Posix
    } else {
        StrategyKind::Portable
    }
}

/// Crawl dispatcher responsible for selecting and executing a backend.
#[derive(Debug)]
pub struct CrawlDispatcher {
    strategy: StrategyKind,
}

impl Default for CrawlDispatcher {
    fn default() -> Self {
        Self {
            strategy: default_strategy(),
        }
    }
}

impl CrawlDispatcher {
    /// Construct a dispatcher for the requested backend, falling back to the
    /// portable one when the request cannot run on this platform.
    #[must_use]
    pub fn with_strategy(requested: StrategyKind) -> Self {
        let resolved = Self::ensure_supported(requested);
        if resolved != requested {
            log::warn!(
                "Requested crawl strategy '{requested}' unsupported; falling back to '{resolved}'"
            );
        }
        Self { strategy: resolved }
    }

    /// Derive the dispatcher from scan options.
    #[must_use]
    pub fn for_options(opts: &ScanOptions) -> Self {
        match opts.strategy_override {
            Some(kind) => Self::with_strategy(kind),
            None => Self::default(),
        }
    }

    /// Expose the backend that will actually run.
    #[must_use]
    pub fn active_strategy(&self) -> StrategyKind {
        self.strategy
    }

    /// Crawl the supplied root with the selected backend.
    pub fn crawl<P: AsRef<Path>>(&self, root: P) -> Result<CrawlResult> {
        match self.strategy {
            StrategyKind::Portable => portable::PortableCrawl.crawl(root.as_ref()),
            StrategyKind::Posix => posix::PosixCrawl.crawl(root.as_ref()),
        }
    }

    fn ensure_supported(kind: StrategyKind) -> StrategyKind {
        match kind {
            StrategyKind::Posix if posix::PosixCrawl::is_supported() => StrategyKind::Posix,
            _ => StrategyKind::Portable,
        }
    }
}

/// Crawl `root` with the host's default backend.
///
/// # Errors
/// Returns [`Error::DirectoryAccess`] if any directory cannot be opened or listed.
pub fn crawl<P: AsRef<Path>>(root: P) -> Result<CrawlResult> {
    CrawlDispatcher::default().crawl(root)
}

/// Crawl `root` with an explicit backend.
///
/// # Errors
/// Returns [`Error::DirectoryAccess`] if any directory cannot be opened or listed.
pub fn crawl_with<P: AsRef<Path>>(root: P, kind: StrategyKind) -> Result<CrawlResult> {
    CrawlDispatcher::with_strategy(kind).crawl(root)
}

/// Hidden entries start with a dot.
#[must_use]
pub fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

/// Make `root` absolute against the current working directory without
/// resolving symlinks.
pub(crate) fn resolve_root(root: &Path) -> Result<PathBuf> {
    std::path::absolute(root).map_err(|source| directory_error(root, source))
}

pub(crate) fn directory_error(dir: &Path, source: std::io::Error) -> Error {
    Error::DirectoryAccess {
        path: normalize_path(dir),
        source,
    }
}

/// Normalize path for cross-platform reporting
#[cfg(windows)]
pub(crate) fn normalize_path(path: &Path) -> String {
    let path_str = path.to_string_lossy();

    if path_str.contains('\\') {
        path_str.replace('\\', "/")
    } else {
        path_str.into_owned()
    }
}

#[cfg(not(windows))]
pub(crate) fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
