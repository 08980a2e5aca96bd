//! Tombstone-and-compact append log realizing LRU order in flat storage.
//!
//! An amortized-O(1) substitute for a doubly linked recency list: live
//! addresses sit in a growing array in least- to most-recently-used order,
//! a re-reference tombstones the old position and re-appends at the head,
//! and a periodic compaction squeezes the tombstones out.
//!
//! ## Architecture
//!
//! ```text
//!   slots: Vec<Option<Address>>
//!
//!    [0]   [1]   [2]   [3]   [4]   [5]   [6]
//!   ┌───┐ ┌───┐ ┌───┐ ┌───┐ ┌───┐ ┌───┐ ┌───┐
//!   │   │ │ A │ │   │ │ B │ │ C │ │   │ │   │
//!   └───┘ └───┘ └───┘ └───┘ └───┘ └───┘ └───┘
//!           ▲                       ▲
//!           │                       │
//!         tail (LRU side)         head (next append)
//!
//!   tail may rest on a tombstone; head always points past the last
//!   append. Live entries between them read LRU -> MRU.
//! ```
//!
//! ## Compaction
//!
//! When `head` would reach twice the nominal capacity, one ordered pass
//! copies every live entry down to the front and resets the cursors. The
//! caller supplies a remap callback so its presence index can follow the
//! entries to their new slots; relative order is preserved exactly.
//!
//! | Operation       | Time        | Notes                              |
//! |-----------------|-------------|------------------------------------|
//! | `push`          | O(1) amort. | may trigger one compaction pass    |
//! | `tombstone`     | O(1)        | vacates a slot in place            |
//! | `pop_oldest`    | O(1) amort. | skips tombstones left by re-refs   |

use crate::Address;

/// Append-only log of addresses with tombstoned vacancies.
#[derive(Debug)]
pub struct RecencyLog {
    slots: Vec<Option<Address>>,
    tail: usize,
    head: usize,
    live: usize,
    nominal: usize,
}

impl RecencyLog {
    /// Creates a log for a cache of `capacity` entries. Storage is bounded
    /// by twice that capacity and allocated lazily.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            tail: 0,
            head: 0,
            live: 0,
            nominal: capacity,
        }
    }

    /// Number of live (non-tombstoned) entries.
    pub fn live(&self) -> usize {
        self.live
    }

    /// Appends `addr` at the head, compacting first if the log has grown
    /// past twice the nominal capacity. Returns the slot used; `remap` is
    /// invoked as `(address, new_slot)` for every live entry a compaction
    /// moves.
    pub fn push(&mut self, addr: Address, mut remap: impl FnMut(Address, usize)) -> usize {
        if self.head >= 2 * self.nominal.max(1) {
            self.compact(&mut remap);
        }
        let idx = self.head;
        if idx == self.slots.len() {
            self.slots.push(Some(addr));
        } else {
            self.slots[idx] = Some(addr);
        }
        self.head += 1;
        self.live += 1;
        idx
    }

    /// Vacates `slot`, returning the address it held.
    pub fn tombstone(&mut self, slot: usize) -> Option<Address> {
        let addr = self.slots.get_mut(slot)?.take()?;
        self.live -= 1;
        Some(addr)
    }

    /// Removes and returns the least-recently-used live address, advancing
    /// the tail past any tombstones on the way.
    pub fn pop_oldest(&mut self) -> Option<Address> {
        while self.tail < self.head {
            let idx = self.tail;
            self.tail += 1;
            if let Some(addr) = self.slots[idx].take() {
                self.live -= 1;
                return Some(addr);
            }
        }
        None
    }

    /// Iterates live addresses most- to least-recently-used.
    pub fn iter_mru(&self) -> impl Iterator<Item = Address> + '_ {
        self.slots[..self.head].iter().rev().filter_map(|slot| *slot)
    }

    fn compact(&mut self, remap: &mut impl FnMut(Address, usize)) {
        let mut next = 0;
        for idx in 0..self.head {
            if let Some(addr) = self.slots[idx].take() {
                self.slots[next] = Some(addr);
                remap(addr, next);
                next += 1;
            }
        }
        self.tail = 0;
        self.head = next;
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert!(self.tail <= self.head);
        assert!(self.head <= self.slots.len());
        let occupied = self.slots[..self.head]
            .iter()
            .filter(|slot| slot.is_some())
            .count();
        assert_eq!(self.live, occupied);
        // nothing live before the tail or past the head
        assert!(self.slots[..self.tail].iter().all(|slot| slot.is_none()));
        assert!(self.slots[self.head..].iter().all(|slot| slot.is_none()));
    }
}
