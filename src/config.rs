//! Cache Configuration

use chrono::TimeDelta;

use crate::error::{CacheError, Result};

/// Default number of seconds an entry stays alive
pub const DEFAULT_TIMEOUT_SECS: i64 = 60;

/// Default survival time for an entry stored without an explicit expiration
pub const DEFAULT_TIMEOUT: TimeDelta = TimeDelta::seconds(DEFAULT_TIMEOUT_SECS);

/// Cache configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Survival time used by `set` when no expiration is given. Must be > 0.
    pub timeout: TimeDelta,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl CacheConfig {
    /// Set the default timeout
    pub fn with_timeout(mut self, timeout: TimeDelta) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the default timeout in whole seconds
    pub fn with_timeout_secs(self, secs: i64) -> Result<Self> {
        let timeout = TimeDelta::try_seconds(secs).ok_or_else(|| {
            CacheError::InvalidArgument(format!("timeout of {secs} seconds is out of range"))
        })?;
        Ok(self.with_timeout(timeout))
    }

    /// Check that the timeout is strictly positive
    pub fn validate(&self) -> Result<()> {
        if self.timeout <= TimeDelta::zero() {
            return Err(CacheError::InvalidArgument(format!(
                "Timeout must be > 0, got {}",
                self.timeout
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout() {
        let config = CacheConfig::default();
        assert_eq!(config.timeout, TimeDelta::seconds(60));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_positive_timeouts_rejected() {
        for secs in [0, -1, -5] {
            let config = CacheConfig::default().with_timeout_secs(secs).unwrap();
            assert!(matches!(
                config.validate(),
                Err(CacheError::InvalidArgument(_))
            ));
        }

        let config = CacheConfig::default().with_timeout_secs(1).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sub_second_timeout_is_positive() {
        let config = CacheConfig::default().with_timeout(TimeDelta::milliseconds(500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_seconds() {
        assert!(CacheConfig::default().with_timeout_secs(i64::MAX).is_err());
    }
}
