//! Storage Engine
//!
//! In-memory key-value store with per-entry expiration.

mod clock;
mod entry;
mod expiry;
mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::TimedEntry;
pub use expiry::{Expiry, SetOptions};
pub use store::TimeoutCache;
