//! Newline counting for a single file

use super::crawl::normalize_path;
use crate::{Error, Result};
use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::Path;

/// Read block size used while scanning file contents.
pub const BLOCK_SIZE: usize = 8192;

/// Count `\n` bytes in the file at `path`.
///
/// A trailing line without a newline is not counted.
///
/// # Errors
/// Returns [`Error::FileRead`] if the file cannot be opened or read.
pub fn count_lines<P: AsRef<Path>>(path: P) -> Result<u64> {
    let path = path.as_ref();
    let read_error = |source| Error::FileRead {
        path: normalize_path(path),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let count = count_newlines_in(file).map_err(read_error)?;

    log::trace!("{}: {count} lines", path.display());
    Ok(count)
}

/// Count `\n` bytes from any reader, reading [`BLOCK_SIZE`] bytes at a time.
pub fn count_newlines_in<R: Read>(mut reader: R) -> io::Result<u64> {
    let mut buf = [0u8; BLOCK_SIZE];
    let mut count = 0u64;

    loop {
        let read = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        count += buf[..read].iter().filter(|&&b| b == b'\n').count() as u64;
    }

    Ok(count)
}
