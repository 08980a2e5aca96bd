//! FIFO replay engine: eviction in strict arrival order.
//!
//! Resident addresses live in a bounded ring; the oldest admission is
//! always the next victim. Hits change nothing but the counters — FIFO
//! deliberately ignores reuse, which is what makes it the baseline the
//! recency-aware policies are compared against.
//!
//! ```text
//!   access(a)
//!        │
//!        ▼
//!   resident? ── yes ──▶ hit, no state change
//!        │
//!        no
//!        ▼
//!   ring full? ── no ──▶ fill_boundary := access counter
//!        │
//!       yes ──▶ evict at tail, age = counter - victim enter time
//!        │
//!        ▼
//!   admit a at head, enter time = counter
//! ```

use crate::Address;
use crate::ds::{PresenceIndex, SlotRing};
use crate::stats::{AccessStats, EvictionStats};
use crate::traits::{AccessOutcome, Eviction, ReplayEngine};

#[derive(Debug, Clone, Copy)]
struct FifoSlot {
    addr: Address,
    entered: u64,
}

/// First-in-first-out eviction engine.
#[derive(Debug)]
pub struct FifoEngine {
    ring: SlotRing<FifoSlot>,
    presence: PresenceIndex,
    stats: AccessStats,
    evictions: EvictionStats,
}

impl FifoEngine {
    /// Creates an engine holding at most `capacity` addresses.
    pub fn new(capacity: usize) -> Self {
        Self {
            ring: SlotRing::new(capacity),
            presence: PresenceIndex::new(),
            stats: AccessStats::default(),
            evictions: EvictionStats::default(),
        }
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.ring.debug_validate_invariants();
        self.presence.debug_validate_invariants();
        assert_eq!(self.presence.resident(), self.ring.len());
        for (slot, entry) in self.ring.iter_indexed() {
            assert_eq!(self.presence.locate(entry.addr), Some(slot));
        }
    }
}

impl ReplayEngine for FifoEngine {
    fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    fn len(&self) -> usize {
        self.presence.resident()
    }

    fn contains(&self, addr: Address) -> bool {
        self.presence.contains(addr)
    }

    fn access(&mut self, addr: Address) -> AccessOutcome {
        self.stats.accesses += 1;
        let now = self.stats.accesses;
        self.presence.ensure(addr);

        if self.presence.contains(addr) {
            return AccessOutcome::hit();
        }

        self.stats.misses += 1;
        let mut outcome = AccessOutcome::miss();
        if self.ring.is_full() {
            if let Some((_, victim)) = self.ring.pop_front() {
                let age = now - victim.entered;
                self.evictions.record(age);
                self.presence.remove(victim.addr);
                outcome.eviction = Some(Eviction {
                    addr: victim.addr,
                    enter_age: age,
                    ref_age: None,
                });
            }
        } else {
            self.stats.fill_boundary = now;
        }

        if let Some(slot) = self.ring.push_back(FifoSlot { addr, entered: now }) {
            self.presence.insert(addr, slot);
        }
        outcome
    }

    fn stats(&self) -> AccessStats {
        self.stats
    }

    fn eviction_stats(&self) -> EvictionStats {
        self.evictions
    }

    fn contents(&self) -> Vec<Address> {
        let mut out: Vec<Address> = self.ring.iter().map(|entry| entry.addr).collect();
        out.reverse();
        out
    }
}
