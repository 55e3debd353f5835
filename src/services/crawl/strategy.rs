//! Strategy trait shared by crawl backends.

use super::{StrategyKind, is_hidden, resolve_root};
use crate::Result;
use crate::models::CrawlResult;
use std::ffi::OsString;
use std::path::Path;

/// One raw directory listing entry, before hidden filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    pub name: OsString,
    pub is_dir: bool,
}

/// Common interface implemented by filesystem-specific crawl backends.
///
/// Backends only know how to list a single directory; the walk itself is
/// shared so every backend yields identical ordering.
pub trait CrawlStrategy {
    /// Identify the strategy for logging and diagnostics.
    fn kind(&self) -> StrategyKind;

    /// List the immediate entries of `dir` in filesystem order, without
    /// following symlinks. `.` and `..` must not be returned.
    fn list(&self, dir: &Path) -> Result<Vec<ListedEntry>>;

    /// Walk `root` depth-first and collect every non-hidden entry.
    fn crawl(&self, root: &Path) -> Result<CrawlResult> {
        let root = resolve_root(root)?;
        log::debug!("Crawling {} with '{}' strategy", root.display(), self.kind());

        let mut result = CrawlResult::default();
        let mut pending = vec![root];

        while let Some(dir) = pending.pop() {
            let entries = self.list(&dir)?;
            let first_child = pending.len();

            for entry in entries {
                if is_hidden(&entry.name) {
                    log::trace!("Skipping hidden entry {:?} in {}", entry.name, dir.display());
                    continue;
                }

                let path = dir.join(&entry.name);
                if entry.is_dir {
                    result.directories.push(path.clone());
                    pending.push(path);
                } else {
                    result.files.push(path);
                }
            }

            // Stack pops from the end; flip so siblings expand in listing order.
            pending[first_child..].reverse();
        }

        Ok(result)
    }
}
