//! Simulation construction and driving.
//!
//! A [`Simulation`] owns one engine per policy, all built with the same
//! capacity so their statistics are comparable, and feeds each of them the
//! same address sequence independently — no engine observes another's
//! state.
//!
//! ## Example
//!
//! ```
//! use replaykit::prelude::*;
//!
//! let mut sim = SimulationBuilder::new(3).try_build().unwrap();
//! sim.replay(&[1, 2, 3, 4, 1, 5, 2]);
//! assert_eq!(sim.fifo.stats().misses, 7);
//! println!("{sim}");
//! ```

use std::fmt;

use crate::Address;
use crate::engine::{ClockEngine, FifoEngine, LruEngine};
use crate::error::ConfigError;
use crate::report;
use crate::traits::ReplayEngine;

/// Builder validating simulation parameters before any engine exists.
#[derive(Debug, Clone)]
pub struct SimulationBuilder {
    capacity: usize,
}

impl SimulationBuilder {
    /// Starts a builder for caches of `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Builds the three engines, rejecting a zero capacity.
    pub fn try_build(self) -> Result<Simulation, ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::new("capacity must be greater than zero"));
        }
        Ok(Simulation {
            fifo: FifoEngine::new(self.capacity),
            lru: LruEngine::new(self.capacity),
            clock: ClockEngine::new(self.capacity),
            capacity: self.capacity,
        })
    }
}

/// The three eviction engines replaying one trace side by side.
#[derive(Debug)]
pub struct Simulation {
    pub fifo: FifoEngine,
    pub lru: LruEngine,
    pub clock: ClockEngine,
    capacity: usize,
}

impl Simulation {
    /// The shared cache capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Replays the full address sequence through every engine.
    pub fn replay(&mut self, addrs: &[Address]) {
        self.fifo.replay(addrs);
        self.lru.replay(addrs);
        self.clock.replay(addrs);
    }
}

impl fmt::Display for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        report::write_report(f, self)
    }
}
