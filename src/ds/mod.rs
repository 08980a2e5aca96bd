pub mod presence;
pub mod recency_log;
pub mod ring;

pub use presence::{PresenceIndex, RefBits, TimeTable};
pub use recency_log::RecencyLog;
pub use ring::SlotRing;
