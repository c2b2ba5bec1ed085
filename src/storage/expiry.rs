//! Expiration Times
//!
//! A caller names an expiration either relative to now or as a fixed
//! instant; both resolve to an absolute [`DateTime<Utc>`].

use chrono::{DateTime, TimeDelta, Utc};

use crate::error::{CacheError, Result};

/// When a stored entry should expire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    /// Seconds from now. Zero or negative means "already expired".
    Seconds(i64),
    /// Relative delay with sub-second precision
    After(TimeDelta),
    /// Fixed point in time
    At(DateTime<Utc>),
}

impl Expiry {
    /// Resolve to an absolute instant against `now`
    pub fn resolve(self, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
        let resolved = match self {
            Expiry::Seconds(secs) => {
                TimeDelta::try_seconds(secs).and_then(|delay| now.checked_add_signed(delay))
            }
            Expiry::After(delay) => now.checked_add_signed(delay),
            Expiry::At(at) => Some(at),
        };

        resolved.ok_or_else(|| {
            CacheError::InvalidArgument(format!(
                "time argument {self:?} could not be converted to a time"
            ))
        })
    }
}

impl From<i64> for Expiry {
    fn from(secs: i64) -> Self {
        Expiry::Seconds(secs)
    }
}

impl From<TimeDelta> for Expiry {
    fn from(delay: TimeDelta) -> Self {
        Expiry::After(delay)
    }
}

impl From<DateTime<Utc>> for Expiry {
    fn from(at: DateTime<Utc>) -> Self {
        Expiry::At(at)
    }
}

/// Options for [`TimeoutCache::set_with`](super::TimeoutCache::set_with)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetOptions {
    /// Expiration time. `None` uses the store's default timeout.
    pub time: Option<Expiry>,
}

impl SetOptions {
    /// Expire `secs` seconds from now
    pub fn expire_in(secs: i64) -> Self {
        Self::default().with_time(Expiry::Seconds(secs))
    }

    /// Expire at a fixed instant
    pub fn expire_at(at: DateTime<Utc>) -> Self {
        Self::default().with_time(Expiry::At(at))
    }

    pub fn with_time(mut self, time: impl Into<Expiry>) -> Self {
        self.time = Some(time.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_seconds() {
        let now = Utc::now();
        assert_eq!(
            Expiry::from(10).resolve(now).unwrap(),
            now + TimeDelta::seconds(10)
        );
        assert_eq!(
            Expiry::from(-1).resolve(now).unwrap(),
            now - TimeDelta::seconds(1)
        );
    }

    #[test]
    fn test_absolute_instant_is_kept() {
        let now = Utc::now();
        let at = now + TimeDelta::minutes(5);
        assert_eq!(Expiry::from(at).resolve(now).unwrap(), at);
    }

    #[test]
    fn test_delta() {
        let now = Utc::now();
        let delay = TimeDelta::milliseconds(1500);
        assert_eq!(Expiry::from(delay).resolve(now).unwrap(), now + delay);
    }

    #[test]
    fn test_unrepresentable_time() {
        let now = Utc::now();
        let err = Expiry::Seconds(i64::MAX).resolve(now).unwrap_err();
        match err {
            CacheError::InvalidArgument(msg) => {
                assert!(msg.contains("could not be converted to a time"))
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(Expiry::After(TimeDelta::days(365 * 1_000_000)).resolve(now).is_err());
    }

    #[test]
    fn test_set_options_builders() {
        assert_eq!(SetOptions::default().time, None);
        assert_eq!(SetOptions::expire_in(3).time, Some(Expiry::Seconds(3)));

        let at = Utc::now();
        assert_eq!(SetOptions::expire_at(at).time, Some(Expiry::At(at)));
    }
}
