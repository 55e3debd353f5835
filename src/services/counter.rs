//! Chunked parallel line counting.
//!
//! The file list is split with [`partition`] and every chunk is handed to its
//! own worker on a dedicated rayon pool. Workers count their files one at a
//! time, then add their subtotal to a shared [`Accumulator`]. The first
//! failure is parked in a [`CancellationToken`]; the remaining workers see the
//! token at their next file boundary and stop without contributing.

use super::chunk::{ChunkRange, partition};
use super::lines::count_lines;
use crate::models::LineTotals;
use crate::{Error, Result};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

/// Files per worker when nothing else is configured.
pub const DEFAULT_CHUNK_SIZE: usize = 100_000;

/// Tuning for a counting run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountOptions {
    /// Files assigned to each worker; must be non-zero.
    pub chunk_size: usize,
    /// Upper bound on concurrently running workers. `None` runs one thread
    /// per chunk.
    pub max_workers: Option<usize>,
}

impl Default for CountOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_workers: None,
        }
    }
}

/// Shared abort signal; the first recorded failure wins.
#[derive(Debug, Default)]
pub struct CancellationToken {
    cancelled: AtomicBool,
    first_error: Mutex<Option<Error>>,
}

impl CancellationToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Signal cancellation without recording a cause.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Record a worker failure and cancel everyone else.
    ///
    /// Returns `true` if this error became the reported one; later errors are
    /// dropped.
    pub fn fail(&self, err: Error) -> bool {
        let mut slot = self
            .first_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let first = slot.is_none();
        if first {
            *slot = Some(err);
        }
        self.cancel();
        first
    }

    /// Take the reported error, if any. A token cancelled without a recorded
    /// cause reports [`Error::Cancelled`].
    #[must_use]
    pub fn into_error(self) -> Option<Error> {
        let cancelled = self.cancelled.into_inner();
        let first = self
            .first_error
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        match first {
            Some(err) => Some(err),
            None if cancelled => Some(Error::Cancelled),
            None => None,
        }
    }
}

/// Grand total guarded by a mutex; each worker adds to it once.
#[derive(Debug, Default)]
pub struct Accumulator {
    total: Mutex<u64>,
}

impl Accumulator {
    pub fn add(&self, subtotal: u64) {
        let mut total = self.total.lock().unwrap_or_else(PoisonError::into_inner);
        *total += subtotal;
    }

    #[must_use]
    pub fn into_total(self) -> u64 {
        self.total
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Count every file in `files` sequentially, checking `token` before each one.
///
/// # Errors
/// Returns [`Error::Cancelled`] if the token is set before a file is started,
/// or the file's own error if it cannot be counted.
pub fn count_chunk(files: &[PathBuf], token: &CancellationToken) -> Result<u64> {
    let mut subtotal = 0u64;
    for path in files {
        if token.is_cancelled() {
            return Err(Error::Cancelled);
        }
        subtotal += count_lines(path)?;
    }
    Ok(subtotal)
}

/// Count newline bytes across `files` using `chunk_size` files per worker.
///
/// # Errors
/// See [`count_total_lines_with`].
pub fn count_total_lines(files: &[PathBuf], chunk_size: usize) -> Result<LineTotals> {
    count_total_lines_with(
        files,
        &CountOptions {
            chunk_size,
            ..CountOptions::default()
        },
    )
}

/// Count newline bytes across `files` in parallel chunks.
///
/// The total is independent of the chunking. On failure the first error is
/// returned and no partial total is reported.
///
/// # Errors
/// Returns [`Error::InvalidInput`] for a zero chunk size or worker cap,
/// [`Error::System`] if the worker pool cannot start, or the first error
/// raised by any worker.
pub fn count_total_lines_with(files: &[PathBuf], opts: &CountOptions) -> Result<LineTotals> {
    if opts.chunk_size == 0 {
        return Err(Error::InvalidInput(
            "chunk size must be greater than zero".to_string(),
        ));
    }
    if opts.max_workers == Some(0) {
        return Err(Error::InvalidInput(
            "worker count must be greater than zero".to_string(),
        ));
    }

    let chunks = partition(files.len(), opts.chunk_size);
    let iterations = chunks.len();
    let workers = opts
        .max_workers
        .map_or(iterations, |cap| cap.min(iterations));

    log::info!(
        "Counting {} files in {iterations} chunks of {} on {workers} workers",
        files.len(),
        opts.chunk_size
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("lcount-worker-{i}"))
        .build()
        .map_err(|e| Error::System(format!("failed to start {workers} workers: {e}")))?;

    let token = CancellationToken::new();
    let accumulator = Accumulator::default();

    pool.scope(|scope| {
        for chunk in &chunks {
            let (token, accumulator) = (&token, &accumulator);
            scope.spawn(move |_| run_worker(files, *chunk, token, accumulator));
        }
    });

    if let Some(err) = token.into_error() {
        return Err(err);
    }

    Ok(LineTotals {
        total_lines: accumulator.into_total(),
        iterations,
    })
}

fn run_worker(
    files: &[PathBuf],
    chunk: ChunkRange,
    token: &CancellationToken,
    accumulator: &Accumulator,
) {
    log::debug!(
        "Worker {} counting files {}..{}",
        chunk.index,
        chunk.start,
        chunk.end
    );

    match count_chunk(&files[chunk.as_range()], token) {
        Ok(subtotal) => {
            log::trace!("Worker {} subtotal {subtotal}", chunk.index);
            accumulator.add(subtotal);
        }
        Err(Error::Cancelled) => {
            log::debug!("Worker {} cancelled", chunk.index);
            token.fail(Error::Cancelled);
        }
        Err(err) => {
            log::debug!("Worker {} failed: {err}", chunk.index);
            token.fail(err);
        }
    }
}
