//! Textual comparison report over a finished simulation.

use std::fmt::{self, Write};

use crate::sim::Simulation;
use crate::stats::{AccessStats, EvictionStats};
use crate::traits::ReplayEngine;

/// Writes the per-policy statistics block for a completed replay.
pub fn write_report<W: Write>(out: &mut W, sim: &Simulation) -> fmt::Result {
    writeln!(out, "=== Cache Simulation Statistics ===")?;
    writeln!(out)?;

    policy_section(
        out,
        "LRU",
        sim.lru.stats(),
        sim.lru.eviction_stats(),
        sim.lru.hit_rate(),
        None,
    )?;
    policy_section(
        out,
        "FIFO",
        sim.fifo.stats(),
        sim.fifo.eviction_stats(),
        sim.fifo.hit_rate(),
        None,
    )?;
    policy_section(
        out,
        "CLOCK",
        sim.clock.stats(),
        sim.clock.eviction_stats(),
        sim.clock.hit_rate(),
        Some(sim.clock.scan_stats().recycles),
    )?;
    Ok(())
}

fn policy_section<W: Write>(
    out: &mut W,
    name: &str,
    stats: AccessStats,
    evictions: EvictionStats,
    hit_rate: f64,
    recycles: Option<u64>,
) -> fmt::Result {
    writeln!(out, "{name}:")?;
    write!(
        out,
        "  Accesses: {}, Misses: {}, Cache fill time: {}",
        stats.accesses, stats.misses, stats.fill_boundary
    )?;
    if let Some(recycles) = recycles {
        write!(out, ", Recycles: {recycles}")?;
    }
    writeln!(out)?;
    match (evictions.mean_age(), evictions.stddev()) {
        (Some(mean), Some(stddev)) => writeln!(
            out,
            "  Evictions: {} (mean age {mean:.2}, stddev {stddev:.2})",
            evictions.evictions
        )?,
        _ => writeln!(out, "  Evictions: 0")?,
    }
    writeln!(out, "  Hit rate: {hit_rate:.4}")?;
    writeln!(out)
}
