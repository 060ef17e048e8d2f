//! Per-key min/mean/max aggregation over a `;`-delimited measurements file.
//!
//! The input is memory-mapped and folded in one pass (optionally chunked
//! across threads) into a per-key accumulator table, then summarized into a
//! single sorted report line.

use std::fs::File;
use std::path::Path;

pub mod engine;
pub mod error;
pub mod record;
pub mod report;
pub mod table;

use crate::error::{Error, Result};
use crate::report::Report;

/// Aggregates `path` with `workers` chunks and returns the finalized
/// report. Any I/O failure or malformed record aborts the run.
pub fn run(path: &Path, workers: usize) -> Result<Report> {
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let len = file
        .metadata()
        .map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?
        .len();
    if len == 0 {
        // Zero-length maps are rejected on some platforms.
        return Ok(report::summarize(&table::Table::default()));
    }
    let mmap = unsafe { memmap2::Mmap::map(&file) }.map_err(|source| Error::Map {
        path: path.to_path_buf(),
        source,
    })?;
    let table = engine::aggregate_parallel(&mmap, workers)?;
    Ok(report::summarize(&table))
}
