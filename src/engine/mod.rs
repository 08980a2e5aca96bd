pub mod clock;
pub mod fifo;
pub mod lru;

pub use clock::ClockEngine;
pub use fifo::FifoEngine;
pub use lru::LruEngine;
