//! Bounded ring buffer with an explicit length field.
//!
//! Backing store for the FIFO and CLOCK engines: entries are admitted at
//! the `head` cursor and examined/evicted at the `tail` cursor, both
//! advanced modulo the capacity.
//!
//! ## Architecture
//!
//! ```text
//!   slots: Vec<Option<T>>          len = 3, capacity = 6
//!
//!     [0]     [1]     [2]     [3]     [4]     [5]
//!    ┌───┐   ┌───┐   ┌───┐   ┌───┐   ┌───┐   ┌───┐
//!    │   │   │ A │   │ B │   │ C │   │   │   │   │
//!    └───┘   └───┘   └───┘   └───┘   └───┘   └───┘
//!              ▲                       ▲
//!              │                       │
//!            tail (oldest)           head (next insertion)
//! ```
//!
//! The occupied region is exactly `len` consecutive slots starting at
//! `tail` (mod capacity). A separate `len` field distinguishes full from
//! empty, rather than the classic trick of leaving one slot permanently
//! unused in a capacity+1 array; the count is less error-prone and makes
//! the capacity exact.
//!
//! `push_back` reports the slot index it used so callers can maintain an
//! address -> slot presence map alongside the ring.

/// Fixed-capacity FIFO ring. Full exactly when `len == capacity`.
#[derive(Debug)]
pub struct SlotRing<T> {
    slots: Vec<Option<T>>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> SlotRing<T> {
    /// Creates a ring with exactly `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    /// Returns the configured capacity (number of slots).
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if no further entry can be admitted.
    ///
    /// A zero-capacity ring is always full.
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Admits `value` at the head cursor, returning the slot index used,
    /// or `None` if the ring is full.
    pub fn push_back(&mut self, value: T) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        let idx = self.head;
        self.slots[idx] = Some(value);
        self.head = self.advance(idx);
        self.len += 1;
        Some(idx)
    }

    /// Removes and returns the oldest entry along with the slot it vacated.
    pub fn pop_front(&mut self) -> Option<(usize, T)> {
        if self.len == 0 {
            return None;
        }
        let idx = self.tail;
        let value = self.slots[idx].take()?;
        self.tail = self.advance(idx);
        self.len -= 1;
        Some((idx, value))
    }

    /// Returns the oldest entry without removing it.
    pub fn front(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.slots[self.tail].as_ref()
    }

    /// Returns the entry at `slot`, if occupied.
    pub fn get(&self, slot: usize) -> Option<&T> {
        self.slots.get(slot)?.as_ref()
    }

    /// Iterates occupied slots oldest to newest as `(slot, entry)` pairs.
    pub fn iter_indexed(&self) -> impl Iterator<Item = (usize, &T)> {
        let cap = self.capacity().max(1);
        (0..self.len).filter_map(move |offset| {
            let idx = (self.tail + offset) % cap;
            self.slots[idx].as_ref().map(|entry| (idx, entry))
        })
    }

    /// Iterates entries oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.iter_indexed().map(|(_, entry)| entry)
    }

    fn advance(&self, idx: usize) -> usize {
        // only reached from push/pop paths, where capacity > 0
        (idx + 1) % self.capacity()
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        let occupied = self.slots.iter().filter(|slot| slot.is_some()).count();
        assert_eq!(self.len, occupied);
        assert!(self.len <= self.capacity());

        if self.capacity() == 0 {
            return;
        }
        assert!(self.head < self.capacity());
        assert!(self.tail < self.capacity());
        // occupied slots form one contiguous run from tail
        for offset in 0..self.len {
            let idx = (self.tail + offset) % self.capacity();
            assert!(self.slots[idx].is_some(), "gap at slot {idx}");
        }
        assert_eq!((self.tail + self.len) % self.capacity(), self.head);
    }
}
