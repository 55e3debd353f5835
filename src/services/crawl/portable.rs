//! Portable crawl backend using standard library primitives.

use super::strategy::{CrawlStrategy, ListedEntry};
use super::{StrategyKind, directory_error};
use crate::Result;
use std::fs;
use std::path::Path;

/// `std::fs::read_dir` backend; the fallback on every platform.
#[derive(Debug, Default, Clone, Copy)]
pub struct PortableCrawl;

impl CrawlStrategy for PortableCrawl {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Portable
    }

    fn list(&self, dir: &Path) -> Result<Vec<ListedEntry>> {
        let entries = fs::read_dir(dir).map_err(|e| directory_error(dir, e))?;

        let mut listed = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| directory_error(dir, e))?;
            // DirEntry::file_type does not follow symlinks.
            let file_type = entry.file_type().map_err(|e| directory_error(dir, e))?;
            listed.push(ListedEntry {
                name: entry.file_name(),
                is_dir: file_type.is_dir(),
            });
        }

        log::debug!("Listed {}: {} entries", dir.display(), listed.len());
        Ok(listed)
    }
}
