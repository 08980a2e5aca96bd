//! CLOCK replay engine: second-chance approximate LRU.
//!
//! Resident addresses sit in a bounded ring in (re)insertion order, with a
//! one-bit reference flag per address. A hit only sets the flag — no buffer
//! movement, which is the whole point of CLOCK. The eviction scan pops at
//! the tail: a flagged address is spared once (flag cleared, re-pushed at
//! the head — a *recycle*), an unflagged one is the victim.
//!
//! ```text
//!   eviction scan (ring full):
//!
//!     ┌────────────────────────────────────────────────┐
//!     │ pop oldest                                     │
//!     │   ref bit set   → clear, re-push, recycle++  ──┼──┐
//!     │   ref bit clear → victim, record ages, stop    │  │
//!     └────────────────────────────────────────────────┘  │
//!                 ▲────────────────────────────────────────┘
//! ```
//!
//! The scan terminates within one revolution: every pass clears the bits it
//! meets, so by the time it returns to its starting point some address must
//! be unflagged. Recycles and total scan steps are reported alongside the
//! shared statistics.

use crate::Address;
use crate::ds::{PresenceIndex, RefBits, SlotRing, TimeTable};
use crate::stats::{AccessStats, ClockScanStats, EvictionStats};
use crate::traits::{AccessOutcome, Eviction, ReplayEngine};

/// Second-chance (CLOCK) eviction engine.
#[derive(Debug)]
pub struct ClockEngine {
    ring: SlotRing<Address>,
    presence: PresenceIndex,
    referenced: RefBits,
    entered: TimeTable,
    last_ref: TimeTable,
    stats: AccessStats,
    evictions: EvictionStats,
    scan: ClockScanStats,
}

impl ClockEngine {
    /// Creates an engine holding at most `capacity` addresses.
    pub fn new(capacity: usize) -> Self {
        Self {
            ring: SlotRing::new(capacity),
            presence: PresenceIndex::new(),
            referenced: RefBits::new(),
            entered: TimeTable::new(),
            last_ref: TimeTable::new(),
            stats: AccessStats::default(),
            evictions: EvictionStats::default(),
            scan: ClockScanStats::default(),
        }
    }

    /// Recycle and scan-step counters (CLOCK reports these beyond the
    /// shared statistics).
    pub fn scan_stats(&self) -> ClockScanStats {
        self.scan
    }

    /// Runs the second-chance scan on a full ring and returns the victim's
    /// eviction record.
    fn evict_one(&mut self, now: u64) -> Option<Eviction> {
        loop {
            let (_, candidate) = self.ring.pop_front()?;
            self.scan.examined += 1;
            if self.referenced.is_set(candidate) {
                self.referenced.clear(candidate);
                if let Some(slot) = self.ring.push_back(candidate) {
                    self.presence.insert(candidate, slot);
                }
                self.scan.recycles += 1;
                continue;
            }

            self.presence.remove(candidate);
            let ref_age = now - self.last_ref.get(candidate);
            let enter_age = now - self.entered.get(candidate);
            self.evictions.record(ref_age);
            return Some(Eviction {
                addr: candidate,
                enter_age,
                ref_age: Some(ref_age),
            });
        }
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.ring.debug_validate_invariants();
        self.presence.debug_validate_invariants();
        assert_eq!(self.presence.resident(), self.ring.len());
        for (slot, &addr) in self.ring.iter_indexed() {
            assert_eq!(self.presence.locate(addr), Some(slot));
        }
    }
}

impl ReplayEngine for ClockEngine {
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
            self.referenced.set(addr);
            self.last_ref.set(addr, now);
            return AccessOutcome::hit();
        }

        self.stats.misses += 1;
        let mut outcome = AccessOutcome::miss();
        if self.ring.capacity() == 0 {
            return outcome;
        }
        if self.ring.is_full() {
            outcome.eviction = self.evict_one(now);
        } else {
            self.stats.fill_boundary = now;
        }

        if let Some(slot) = self.ring.push_back(addr) {
            self.presence.insert(addr, slot);
            self.referenced.clear(addr);
            self.entered.set(addr, now);
            self.last_ref.set(addr, now);
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
        let mut out: Vec<Address> = self.ring.iter().copied().collect();
        out.reverse();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_chance_spares_referenced_entry() {
        // capacity 2, [1,2,1,3]: the hit on 1 sets its bit, so the scan
        // recycles 1 and evicts 2.
        let mut clock = ClockEngine::new(2);
        let outcomes = clock.replay_traced(&[1, 2, 1, 3]);

        assert!(!outcomes[2].miss);
        let eviction = outcomes[3].eviction.unwrap();
        assert_eq!(eviction.addr, 2);
        assert_eq!(eviction.ref_age, Some(2));
        assert_eq!(eviction.enter_age, 2);

        let scan = clock.scan_stats();
        assert_eq!(scan.recycles, 1);
        assert_eq!(scan.examined, 2);
        assert_eq!(clock.contents(), vec![3, 1]);
        assert_eq!(clock.stats().fill_boundary, 2);
        clock.debug_validate_invariants();
    }

    #[test]
    fn unreferenced_entries_evict_in_arrival_order() {
        let mut clock = ClockEngine::new(2);
        let outcomes = clock.replay_traced(&[1, 2, 3, 4]);

        let evicted: Vec<Address> = outcomes
            .iter()
            .filter_map(|outcome| outcome.eviction.map(|e| e.addr))
            .collect();
        assert_eq!(evicted, vec![1, 2]);
        assert_eq!(clock.scan_stats().recycles, 0);
        assert_eq!(clock.scan_stats().examined, 2);
    }

    #[test]
    fn scan_terminates_when_every_bit_is_set() {
        // all residents referenced: one full revolution of recycles, then
        // the first candidate (now unflagged) is evicted
        let mut clock = ClockEngine::new(3);
        clock.replay(&[1, 2, 3, 1, 2, 3]);
        let outcome = clock.access(4);

        let eviction = outcome.eviction.unwrap();
        assert_eq!(eviction.addr, 1);
        let scan = clock.scan_stats();
        assert_eq!(scan.recycles, 3);
        assert_eq!(scan.examined, 4);
        clock.debug_validate_invariants();
    }

    #[test]
    fn recycled_entry_is_eligible_again_without_new_hit() {
        let mut clock = ClockEngine::new(2);
        clock.replay(&[1, 2, 1]);
        // evicts 2 (1 recycled), then 1 has a clear bit and goes next
        let first = clock.access(3).eviction.unwrap();
        assert_eq!(first.addr, 2);
        let second = clock.access(4).eviction.unwrap();
        assert_eq!(second.addr, 1);
    }

    #[test]
    fn a_hit_refreshes_last_reference_but_not_enter_time() {
        let mut clock = ClockEngine::new(2);
        // 2 enters at access 2 and is hit at access 3
        clock.replay(&[1, 2, 2]);
        // scan: 1 unflagged -> victim; then 4 admitted
        let eviction = clock.access(4).eviction.unwrap();
        assert_eq!(eviction.addr, 1);

        // admitting 5 recycles 2 (bit from the hit) and evicts 4; the next
        // miss then takes 2, whose ages split: last referenced at access 3,
        // entered at access 2, evicted at access 6
        clock.access(5);
        let eviction = clock.access(6).eviction.unwrap();
        assert_eq!(eviction.addr, 2);
        assert_eq!(eviction.ref_age, Some(3));
        assert_eq!(eviction.enter_age, 4);
        clock.debug_validate_invariants();
    }

    #[test]
    fn zero_capacity_never_admits_or_scans() {
        let mut clock = ClockEngine::new(0);
        let outcome = clock.access(1);
        assert!(outcome.miss);
        assert!(outcome.eviction.is_none());
        assert!(clock.is_empty());
        assert_eq!(clock.scan_stats(), ClockScanStats::default());
    }
}
