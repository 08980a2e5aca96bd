//! Address-indexed growable tables.
//!
//! The trace address space is not bounded at construction time, so every
//! per-address structure here starts empty and grows by a 3/2 factor the
//! first time an address at or beyond its current bound is touched. Growth
//! preserves all existing entries and is amortized O(1) per access; it is
//! bounded only by available memory and never surfaces as an error.
//!
//! ## Key Components
//!
//! - [`PresenceIndex`]: `address -> Option<slot>` residency map. An address
//!   is resident iff its cell is `Some`, and the stored slot is a valid,
//!   currently-occupied position in the owning engine's buffer.
//! - [`TimeTable`]: `address -> access sequence number` (enter time or
//!   last-reference time).
//! - [`RefBits`]: `address -> bool` second-chance reference flags (CLOCK).
//!
//! Lookups on addresses beyond the current bound answer "absent"/zero/unset
//! without growing; only writes grow.

use crate::Address;

/// Number of cells a table covering `addr` grows to: a 3/2 factor past the
/// address, so repeated growth over an ascending trace is geometric.
fn grown_len(addr: usize) -> usize {
    (addr.saturating_mul(3) / 2).max(addr + 1)
}

// ---------------------------------------------------------------------------
// PresenceIndex
// ---------------------------------------------------------------------------

/// Sparse residency map from address to buffer slot.
///
/// Replaces the classic sentinel-valued (`-1`) presence array with an
/// explicit `Option` per cell. Also maintains the resident count so engines
/// can test their capacity bound without scanning.
#[derive(Debug, Default)]
pub struct PresenceIndex {
    slots: Vec<Option<usize>>,
    resident: usize,
}

impl PresenceIndex {
    /// Creates an empty index. No cells are preallocated; the table grows
    /// lazily from the addresses actually observed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of addresses the table currently covers.
    pub fn bound(&self) -> usize {
        self.slots.len()
    }

    /// Number of addresses currently marked resident.
    pub fn resident(&self) -> usize {
        self.resident
    }

    /// Grows the table to cover `addr` if it does not already.
    pub fn ensure(&mut self, addr: Address) {
        let idx = addr as usize;
        if idx >= self.slots.len() {
            self.slots.resize(grown_len(idx), None);
        }
    }

    /// Returns `true` if `addr` is resident.
    pub fn contains(&self, addr: Address) -> bool {
        self.locate(addr).is_some()
    }

    /// Returns the buffer slot holding `addr`, if resident.
    pub fn locate(&self, addr: Address) -> Option<usize> {
        self.slots.get(addr as usize).copied().flatten()
    }

    /// Marks `addr` resident at `slot`, overwriting any previous slot.
    pub fn insert(&mut self, addr: Address, slot: usize) {
        self.ensure(addr);
        let cell = &mut self.slots[addr as usize];
        if cell.is_none() {
            self.resident += 1;
        }
        *cell = Some(slot);
    }

    /// Marks `addr` absent, returning the slot it occupied.
    pub fn remove(&mut self, addr: Address) -> Option<usize> {
        let cell = self.slots.get_mut(addr as usize)?;
        let slot = cell.take();
        if slot.is_some() {
            self.resident -= 1;
        }
        slot
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        let occupied = self.slots.iter().filter(|cell| cell.is_some()).count();
        assert_eq!(self.resident, occupied);
    }
}

// ---------------------------------------------------------------------------
// TimeTable
// ---------------------------------------------------------------------------

/// Per-address access sequence numbers (enter or last-reference times).
///
/// Cells default to zero; values are only meaningful for addresses the
/// owning engine currently tracks.
#[derive(Debug, Default)]
pub struct TimeTable {
    cells: Vec<u64>,
}

impl TimeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records sequence number `t` for `addr`, growing the table if needed.
    pub fn set(&mut self, addr: Address, t: u64) {
        let idx = addr as usize;
        if idx >= self.cells.len() {
            self.cells.resize(grown_len(idx), 0);
        }
        self.cells[idx] = t;
    }

    /// Returns the recorded sequence number for `addr` (zero if never set).
    pub fn get(&self, addr: Address) -> u64 {
        self.cells.get(addr as usize).copied().unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// RefBits
// ---------------------------------------------------------------------------

/// Per-address one-bit reference flags for second-chance eviction.
#[derive(Debug, Default)]
pub struct RefBits {
    bits: Vec<bool>,
}

impl RefBits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reference bit for `addr`, growing the table if needed.
    pub fn set(&mut self, addr: Address) {
        let idx = addr as usize;
        if idx >= self.bits.len() {
            self.bits.resize(grown_len(idx), false);
        }
        self.bits[idx] = true;
    }

    /// Clears the reference bit for `addr`.
    pub fn clear(&mut self, addr: Address) {
        if let Some(bit) = self.bits.get_mut(addr as usize) {
            *bit = false;
        }
    }

    /// Returns the reference bit for `addr` (unset if never touched).
    pub fn is_set(&self, addr: Address) -> bool {
        self.bits.get(addr as usize).copied().unwrap_or(false)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
