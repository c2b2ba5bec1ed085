//! Timeout Cache - In-Memory Key-Value Store with Expiring Entries
//!
//! Every entry carries an absolute expiration time. Once that time is
//! reached the entry reads as absent, and it is physically removed the next
//! time the store prunes. There is no background task: pruning happens
//! lazily on `get`, `len` and `is_empty`, or on an explicit `prune`.
//!
//! ```
//! use timeout_cache::{SetOptions, TimeoutCache};
//!
//! let mut cache = TimeoutCache::new();
//! cache.set("foo", "bar");
//! assert_eq!(cache.get("foo"), Some(&"bar"));
//!
//! // An expiration that is not in the future stores nothing.
//! assert_eq!(cache.set_with("baz", "qux", SetOptions::expire_in(-1)), Ok(None));
//! assert_eq!(cache.get("baz"), None);
//! ```

pub mod config;
pub mod error;
pub mod storage;

pub use config::{CacheConfig, DEFAULT_TIMEOUT};
pub use error::{CacheError, Result};
pub use storage::{Clock, Expiry, ManualClock, SetOptions, SystemClock, TimedEntry, TimeoutCache};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
