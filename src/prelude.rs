pub use crate::Address;
pub use crate::engine::{ClockEngine, FifoEngine, LruEngine};
pub use crate::error::{ConfigError, TraceError};
pub use crate::sim::{Simulation, SimulationBuilder};
pub use crate::stats::{AccessStats, ClockScanStats, EvictionStats};
pub use crate::trace::TraceSummary;
pub use crate::traits::{AccessOutcome, Eviction, ReplayEngine};
