//! replaykit: offline replay of storage traces against classic cache
//! eviction policies.
//!
//! Feeds one fixed access trace through three independent engines — FIFO,
//! LRU, and CLOCK (second-chance) — each bounded by the same capacity, and
//! reports per-policy access/miss counts, the point at which the cache first
//! became full, and eviction-age statistics.
//!
//! ## Example
//!
//! ```
//! use replaykit::prelude::*;
//!
//! let mut sim = SimulationBuilder::new(2).try_build().unwrap();
//! sim.replay(&[1, 2, 1, 3]);
//!
//! // The hit on 1 made 2 the LRU victim when 3 was admitted.
//! assert_eq!(sim.lru.stats().misses, 3);
//! assert_eq!(sim.lru.contents(), vec![3, 1]);
//!
//! // CLOCK spared 1 via its reference bit and evicted 2 instead.
//! assert_eq!(sim.clock.scan_stats().recycles, 1);
//! ```

pub mod ds;
pub mod engine;
pub mod error;
pub mod prelude;
pub mod report;
pub mod sim;
pub mod stats;
pub mod trace;
pub mod traits;

/// A unit of storage referenced by a trace access (e.g. a page or block
/// number). Not bounded a priori; internal index structures grow to cover
/// the largest address actually observed.
pub type Address = u64;
