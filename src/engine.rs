use memchr::{memchr, memchr_iter};
use rayon::prelude::*;

use crate::error::Result;
use crate::record;
use crate::table::{Accumulator, Table};

/// Folds every record in `data[start..end]` into `table`. `start` must sit
/// on a line boundary; `end` is exclusive and records crossing it are left
/// for the next chunk.
fn fold_chunk<'a>(data: &'a [u8], start: usize, end: usize, table: &mut Table<'a>) -> Result<()> {
    let mut offset = start;
    while offset < end {
        let line_end = memchr(b'\n', &data[offset..end])
            .map(|pos| offset + pos)
            .unwrap_or(end);
        let line = &data[offset..line_end];
        let (key, value) =
            record::parse(line).map_err(|e| e.at(line_number(data, offset)))?;
        table
            .entry(key)
            .and_modify(|acc| acc.fold(value))
            .or_insert_with(|| Accumulator::new(value));
        offset = line_end + 1;
    }
    Ok(())
}

/// 1-based line number of the line starting at `offset`. Only reached when
/// a record is malformed.
fn line_number(data: &[u8], offset: usize) -> u64 {
    memchr_iter(b'\n', &data[..offset]).count() as u64 + 1
}

/// Single-threaded, single-pass aggregation over the whole input.
pub fn aggregate(data: &[u8]) -> Result<Table<'_>> {
    let mut table = Table::default();
    fold_chunk(data, 0, data.len(), &mut table)?;
    Ok(table)
}

/// Splits the input into `workers` chunks on line boundaries, folds each
/// chunk into a private table on the rayon pool, then reduces the chunk
/// tables with the accumulator merge rule. The first malformed record in
/// any chunk fails the whole run.
pub fn aggregate_parallel(data: &[u8], workers: usize) -> Result<Table<'_>> {
    if workers <= 1 {
        return aggregate(data);
    }

    let chunk_size = data.len() / workers;
    let mut bounds = Vec::with_capacity(workers + 1);
    bounds.push(0);
    for i in 1..workers {
        bounds.push(next_line_start(data, i * chunk_size));
    }
    bounds.push(data.len());

    bounds
        .windows(2)
        .map(|pair| (pair[0], pair[1]))
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|(start, end)| {
            let mut table = Table::default();
            fold_chunk(data, start, end, &mut table)?;
            Ok(table)
        })
        .try_reduce(Table::default, |mut acc, chunk| {
            for (key, value) in chunk {
                acc.entry(key)
                    .and_modify(|e| e.merge(&value))
                    .or_insert(value);
            }
            Ok(acc)
        })
}

/// First position after the next `\n` at or past `position`, or the end of
/// the input if none remains.
fn next_line_start(data: &[u8], position: usize) -> usize {
    memchr(b'\n', &data[position..])
        .map(|pos| position + pos + 1)
        .unwrap_or(data.len())
}
