//! Expiring Key-Value Store
//!
//! Hashmap from key to [`TimedEntry`]. Lookups stay O(1); there is no
//! ordered expiration index, so pruning scans the whole map. Expired entries
//! are removed lazily by `get`, `len` and `is_empty`, or explicitly by `prune`.
//!
//! The store is single-threaded. Every operation that may prune takes
//! `&mut self`; sharing a store across threads needs an external lock.

use chrono::{DateTime, TimeDelta, Utc};
use hashbrown::HashMap;
use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::num::NonZeroUsize;
use tracing::{debug, trace};

use super::{Clock, Expiry, SetOptions, SystemClock, TimedEntry};
use crate::config::{CacheConfig, DEFAULT_TIMEOUT};
use crate::error::{CacheError, Result};

/// In-memory key-value store whose entries expire
pub struct TimeoutCache<K, V, C = SystemClock> {
    entries: HashMap<K, TimedEntry<V>>,
    timeout: TimeDelta,
    clock: C,
}

impl<K, V> Default for TimeoutCache<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> TimeoutCache<K, V>
where
    K: Eq + Hash,
{
    /// Create an empty store with the default 60 second timeout
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            timeout: DEFAULT_TIMEOUT,
            clock: SystemClock,
        }
    }

    /// Create an empty store with a custom default timeout.
    ///
    /// Fails with [`CacheError::InvalidArgument`] unless `timeout > 0`.
    pub fn with_timeout(timeout: TimeDelta) -> Result<Self> {
        Self::with_config(CacheConfig::default().with_timeout(timeout))
    }

    /// Same as [`with_timeout`](Self::with_timeout), in whole seconds
    pub fn with_timeout_secs(secs: i64) -> Result<Self> {
        Self::with_config(CacheConfig::default().with_timeout_secs(secs)?)
    }

    pub fn with_config(config: CacheConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<K, V, C> TimeoutCache<K, V, C>
where
    K: Eq + Hash,
    C: Clock,
{
    /// Create an empty store that reads the current time from `clock`
    pub fn with_clock(config: CacheConfig, clock: C) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            entries: HashMap::new(),
            timeout: config.timeout,
            clock,
        })
    }

    /// Default survival time of an entry
    pub fn timeout(&self) -> TimeDelta {
        self.timeout
    }

    /// Get the value for `key`, or `None` if it is missing or expired.
    ///
    /// Finding an expired entry prunes the whole store.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let now = self.clock.now();
        if self.entries.get(key)?.is_expired(now) {
            self.prune_at(now);
            return None;
        }
        self.entries.get(key).map(TimedEntry::value)
    }

    /// Expiration time recorded for `key`.
    ///
    /// Reports the stored instant even if it has passed and the entry has not
    /// been pruned yet. Fails with [`CacheError::NotFound`] if there is no entry.
    pub fn expire_time<Q>(&self, key: &Q) -> Result<DateTime<Utc>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries
            .get(key)
            .map(TimedEntry::expires_at)
            .ok_or(CacheError::NotFound)
    }

    /// Store `value` under `key`, expiring after the default timeout.
    /// Replaces any existing entry.
    pub fn set(&mut self, key: K, value: V) {
        let expires_at = self
            .clock
            .now()
            .checked_add_signed(self.timeout)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.entries.insert(key, TimedEntry::new(value, expires_at));
    }

    /// Store `value` under `key` with an explicit expiration.
    ///
    /// If the expiration is not after the current time nothing is stored, any
    /// existing entry for `key` is left alone, and `Ok(None)` is returned.
    /// Otherwise the entry is replaced and the stored value is returned.
    pub fn set_with(&mut self, key: K, value: V, options: SetOptions) -> Result<Option<&V>> {
        let now = self.clock.now();
        let expires_at = options
            .time
            .unwrap_or(Expiry::After(self.timeout))
            .resolve(now)?;

        if expires_at <= now {
            trace!(%expires_at, %now, "Expiration not in the future, value not stored");
            return Ok(None);
        }

        let entry = self
            .entries
            .entry(key)
            .insert(TimedEntry::new(value, expires_at));
        Ok(Some(entry.into_mut().value()))
    }

    /// Remove `key` whether or not it has expired, returning its value
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.remove(key).map(TimedEntry::into_value)
    }

    /// Prune, then count the remaining entries
    pub fn len(&mut self) -> usize {
        self.prune();
        self.entries.len()
    }

    /// Prune, then check whether any entries remain
    pub fn is_empty(&mut self) -> bool {
        self.prune();
        self.entries.is_empty()
    }

    /// Remove every expired entry.
    ///
    /// Returns the number removed, or `None` when nothing was removed
    /// (including when the store was already empty).
    pub fn prune(&mut self) -> Option<NonZeroUsize> {
        let now = self.clock.now();
        self.prune_at(now)
    }

    // One `now` for the whole scan.
    fn prune_at(&mut self, now: DateTime<Utc>) -> Option<NonZeroUsize> {
        if self.entries.is_empty() {
            return None;
        }

        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        let removed = NonZeroUsize::new(before - self.entries.len())?;

        debug!(
            removed = removed.get(),
            remaining = self.entries.len(),
            "Pruned expired entries"
        );
        Some(removed)
    }
}

impl<K, V, C> fmt::Debug for TimeoutCache<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeoutCache")
            .field("timeout", &self.timeout)
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}
