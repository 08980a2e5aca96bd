//! Replay engine trait and per-access outcome records.
//!
//! All three engines expose the same surface: feed addresses one at a time
//! through [`ReplayEngine::access`], then read final statistics. Engines
//! share no state; the trait exists so drivers, tests, and benchmarks can
//! treat them uniformly.
//!
//! ## Trait Summary
//!
//! | Operation          | Purpose                                        |
//! |--------------------|------------------------------------------------|
//! | `access`           | classify one access, evict if needed           |
//! | `replay`           | feed a whole address slice                     |
//! | `replay_traced`    | like `replay`, collecting one outcome per step |
//! | `stats`            | access/miss/fill counters                      |
//! | `eviction_stats`   | eviction-age moments                           |
//! | `hit_rate`         | inherited steady-state estimate                |
//! | `contents`         | resident addresses, newest first               |

use crate::Address;
use crate::stats::{AccessStats, EvictionStats};

/// Record of one eviction performed during an access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eviction {
    /// The address that was removed.
    pub addr: Address,
    /// Accesses elapsed since the victim was admitted.
    pub enter_age: u64,
    /// Accesses elapsed since the victim was last referenced. `None` for
    /// FIFO, which does not track references.
    pub ref_age: Option<u64>,
}

/// Outcome of a single [`ReplayEngine::access`] call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AccessOutcome {
    /// `true` if the address was not resident.
    pub miss: bool,
    /// The eviction this access forced, if any.
    pub eviction: Option<Eviction>,
}

impl AccessOutcome {
    /// Outcome for an access that found its address resident.
    pub fn hit() -> Self {
        Self::default()
    }

    /// Outcome for an access that missed (eviction filled in by the caller).
    pub fn miss() -> Self {
        Self {
            miss: true,
            eviction: None,
        }
    }
}

/// A capacity-bounded eviction engine replaying one address at a time.
pub trait ReplayEngine {
    /// Maximum number of simultaneously resident addresses.
    fn capacity(&self) -> usize;

    /// Number of currently resident addresses.
    fn len(&self) -> usize;

    /// Returns `true` if nothing is resident.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `addr` is currently resident.
    fn contains(&self, addr: Address) -> bool;

    /// Classifies one access as hit or miss, updating residency, eviction
    /// state, and statistics.
    fn access(&mut self, addr: Address) -> AccessOutcome;

    /// Access/miss counters and the cache-fill boundary.
    fn stats(&self) -> AccessStats;

    /// Eviction-age moments.
    fn eviction_stats(&self) -> EvictionStats;

    /// Resident addresses ordered newest to oldest (by policy order).
    fn contents(&self) -> Vec<Address>;

    /// Inherited steady-state hit-rate estimate (see [`AccessStats::hit_rate`]).
    fn hit_rate(&self) -> f64 {
        self.stats().hit_rate(self.capacity())
    }

    /// Replays a whole address sequence.
    fn replay(&mut self, addrs: &[Address]) {
        for &addr in addrs {
            let _ = self.access(addr);
        }
    }

    /// Replays a whole address sequence, collecting one outcome per access.
    fn replay_traced(&mut self, addrs: &[Address]) -> Vec<AccessOutcome> {
        addrs.iter().map(|&addr| self.access(addr)).collect()
    }
}
