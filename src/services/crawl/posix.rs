//! POSIX crawl backend leveraging `rustix` primitives.
//!
//! Directories are opened with `openat` and read with `getdents64`; the entry
//! kind comes from `d_type`, with a `statat(AT_SYMLINK_NOFOLLOW)` fallback for
//! filesystems that report `DT_UNKNOWN`.

use super::StrategyKind;
use super::strategy::{CrawlStrategy, ListedEntry};
use crate::Result;
use std::path::Path;

#[cfg(unix)]
use super::directory_error;
#[cfg(unix)]
use rustix::fs::{self as rfs, AtFlags, Dir, FileType, Mode, OFlags};
#[cfg(unix)]
use std::ffi::OsString;
#[cfg(unix)]
use std::os::unix::ffi::OsStringExt;

/// POSIX crawl backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct PosixCrawl;

impl PosixCrawl {
    #[must_use]
    pub fn is_supported() -> bool {
        cfg!(unix)
    }
}

impl CrawlStrategy for PosixCrawl {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Posix
    }

    fn list(&self, dir: &Path) -> Result<Vec<ListedEntry>> {
        #[cfg(unix)]
        {
            posix_list(dir)
        }

        #[cfg(not(unix))]
        {
            log::debug!("posix::PosixCrawl invoked on non-Unix platform; falling back to portable");
            super::portable::PortableCrawl.list(dir)
        }
    }
}

#[cfg(unix)]
fn posix_list(dir: &Path) -> Result<Vec<ListedEntry>> {
    let io_error = |err: rustix::io::Errno| directory_error(dir, std::io::Error::from(err));

    let dir_fd = rfs::openat(
        rfs::CWD,
        dir,
        OFlags::RDONLY | OFlags::DIRECTORY | OFlags::CLOEXEC,
        Mode::empty(),
    )
    .map_err(io_error)?;

    let dir_iter = Dir::read_from(&dir_fd).map_err(io_error)?;

    let mut listed = Vec::new();
    for entry_result in dir_iter {
        let entry = entry_result.map_err(io_error)?;

        let name_bytes = entry.file_name().to_bytes();
        if name_bytes == b"." || name_bytes == b".." {
            continue;
        }

        let is_dir = match entry.file_type() {
            FileType::Directory => true,
            FileType::Unknown => {
                let stat = rfs::statat(&dir_fd, entry.file_name(), AtFlags::SYMLINK_NOFOLLOW)
                    .map_err(io_error)?;
                FileType::from_raw_mode(stat.st_mode) == FileType::Directory
            }
            _ => false,
        };

        listed.push(ListedEntry {
            name: OsString::from_vec(name_bytes.to_vec()),
            is_dir,
        });
    }

    log::debug!("Listed {}: {} entries", dir.display(), listed.len());
    Ok(listed)
}
