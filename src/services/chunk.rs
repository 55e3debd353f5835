//! Partitioning of the crawled file list into per-worker chunks

use std::ops::Range;

/// Contiguous slice bounds assigned to one worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkRange {
    pub index: usize,
    pub start: usize,
    pub end: usize,
}

impl ChunkRange {
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[must_use]
    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Number of workers used for `len` files: `max(1, len / chunk_size)`.
///
/// `chunk_size` must be non-zero.
#[must_use]
pub fn iteration_count(len: usize, chunk_size: usize) -> usize {
    (len / chunk_size).max(1)
}

/// Split `len` items into [`iteration_count`] contiguous ranges.
///
/// Worker `i` starts at `i * chunk_size`; the last worker's range is clamped
/// to `len`, so it also absorbs the remainder when `len` is not a multiple of
/// `chunk_size`. The ranges cover `0..len` exactly once, in order.
#[must_use]
pub fn partition(len: usize, chunk_size: usize) -> Vec<ChunkRange> {
    let iterations = iteration_count(len, chunk_size);

    (0..iterations)
        .map(|index| {
            let start = (index * chunk_size).min(len);
            let end = if index + 1 == iterations {
                len
            } else {
                (start + chunk_size).min(len)
            };
            ChunkRange { index, start, end }
        })
        .collect()
}
