use chrono::{DateTime, Utc};

/// Stored value with its absolute expiration time.
///
/// An entry is never updated in place; storing under the same key replaces
/// the whole entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedEntry<V> {
    value: V,
    expires_at: DateTime<Utc>,
}

impl<V> TimedEntry<V> {
    pub fn new(value: V, expires_at: DateTime<Utc>) -> Self {
        Self { value, expires_at }
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_value(self) -> V {
        self.value
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// An entry expires exactly at its boundary instant
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
