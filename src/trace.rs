//! Trace parsing and summarization.
//!
//! A trace line carries three whitespace-separated integers. The first two
//! (operation type, timestamp, or similar in the source format) carry no
//! semantic weight here; the third is the address. Blank lines are skipped;
//! any other malformed line is fatal for the whole run, since statistics
//! are only meaningful over the full trace.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rustc_hash::FxHashSet;

use crate::Address;
use crate::error::TraceError;

/// Parses a trace into the address sequence the engines replay.
pub fn read_trace<R: BufRead>(reader: R) -> Result<Vec<Address>, TraceError> {
    let mut addrs = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        addrs.push(parse_line(trimmed).ok_or(TraceError::Format { line: number })?);
    }
    Ok(addrs)
}

/// Opens `path` and parses it as a trace.
pub fn read_trace_file(path: impl AsRef<Path>) -> Result<Vec<Address>, TraceError> {
    let file = File::open(path)?;
    read_trace(BufReader::new(file))
}

fn parse_line(line: &str) -> Option<Address> {
    let mut fields = line.split_whitespace();
    let (first, second, addr) = (fields.next()?, fields.next()?, fields.next()?);
    if fields.next().is_some() {
        return None;
    }
    // the ignored columns must still be integers for the line to be valid
    first.parse::<i64>().ok()?;
    second.parse::<i64>().ok()?;
    addr.parse::<Address>().ok()
}

/// Shape of a parsed trace: length, distinct addresses, address bound.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TraceSummary {
    pub accesses: usize,
    pub distinct: usize,
    pub max_address: Option<Address>,
}

/// Summarizes an address sequence (one pass, hash-set dedup).
pub fn summarize(addrs: &[Address]) -> TraceSummary {
    let distinct: FxHashSet<Address> = addrs.iter().copied().collect();
    TraceSummary {
        accesses: addrs.len(),
        distinct: distinct.len(),
        max_address: addrs.iter().copied().max(),
    }
}
