//! LRU replay engine over a tombstone-and-compact recency log.
//!
//! Move-to-front is realized without a linked list: a hit vacates the
//! entry's current log slot and re-appends it at the head, so the log read
//! tail-to-head is always exactly least- to most-recently-used among live
//! entries. When the resident set would exceed capacity, the victim is the
//! live entry nearest the tail.
//!
//! ```text
//!   access(a)
//!        │
//!        ▼
//!   below capacity? ── yes ──▶ fill_boundary := access counter
//!        │
//!        ▼
//!   resident? ── yes ──▶ tombstone old slot          (hit)
//!        │       no  ──▶ miss, enter time := counter
//!        ▼
//!   append a at head, last-ref := counter
//!        │
//!        ▼
//!   over capacity? ──▶ pop at tail, record ages
//! ```

use crate::Address;
use crate::ds::{PresenceIndex, RecencyLog, TimeTable};
use crate::stats::{AccessStats, EvictionStats};
use crate::traits::{AccessOutcome, Eviction, ReplayEngine};

/// Least-recently-used eviction engine.
#[derive(Debug)]
pub struct LruEngine {
    log: RecencyLog,
    presence: PresenceIndex,
    entered: TimeTable,
    last_ref: TimeTable,
    capacity: usize,
    stats: AccessStats,
    evictions: EvictionStats,
}

impl LruEngine {
    /// Creates an engine holding at most `capacity` addresses.
    pub fn new(capacity: usize) -> Self {
        Self {
            log: RecencyLog::new(capacity),
            presence: PresenceIndex::new(),
            entered: TimeTable::new(),
            last_ref: TimeTable::new(),
            capacity,
            stats: AccessStats::default(),
            evictions: EvictionStats::default(),
        }
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.log.debug_validate_invariants();
        self.presence.debug_validate_invariants();
        assert_eq!(self.presence.resident(), self.log.live());
        for addr in self.log.iter_mru() {
            assert!(self.presence.locate(addr).is_some());
        }
    }
}

impl ReplayEngine for LruEngine {
    fn capacity(&self) -> usize {
        self.capacity
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
        // LRU, unlike FIFO/CLOCK, refreshes the boundary on every access
        // made below capacity, hits included.
        if self.presence.resident() < self.capacity {
            self.stats.fill_boundary = now;
        }
        self.presence.ensure(addr);

        let mut outcome;
        if let Some(slot) = self.presence.locate(addr) {
            outcome = AccessOutcome::hit();
            self.log.tombstone(slot);
        } else {
            self.stats.misses += 1;
            outcome = AccessOutcome::miss();
            if self.capacity == 0 {
                return outcome;
            }
            self.entered.set(addr, now);
        }
        self.last_ref.set(addr, now);

        // move-to-front: fresh slot at the head (compaction may remap)
        let presence = &mut self.presence;
        let slot = self.log.push(addr, |moved, new_slot| {
            presence.insert(moved, new_slot);
        });
        self.presence.insert(addr, slot);

        if self.presence.resident() > self.capacity {
            if let Some(victim) = self.log.pop_oldest() {
                self.presence.remove(victim);
                let ref_age = now - self.last_ref.get(victim);
                let enter_age = now - self.entered.get(victim);
                self.evictions.record(ref_age);
                outcome.eviction = Some(Eviction {
                    addr: victim,
                    enter_age,
                    ref_age: Some(ref_age),
                });
            }
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
        self.log.iter_mru().collect()
    }
}
