//! Runtime configuration for native sources and query deadlines.

use std::time::Duration;

use thiserror::Error;

use crate::system::BackendChoice;

/// Default fraction of total memory at or below which the device source
/// reports low memory.
pub const DEFAULT_LOW_MEMORY_RATIO: f64 = 0.05;

/// Default upper bound for a single memory query.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_millis(2_000);

/// Errors raised when validating a [`RuntimeConfig`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Low-memory ratio outside `[0, 1]` or not a number.
    #[error("Low-memory ratio must be between 0 and 1, got {0}")]
    InvalidLowMemoryRatio(f64),

    /// A zero timeout would fail every query.
    #[error("Query timeout must be greater than zero")]
    ZeroTimeout,
}

/// Configuration for building a probe and running queries.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    /// Which probe variant to use.
    pub backend: BackendChoice,
    /// Fraction of total memory treated as the low-memory threshold.
    pub low_memory_ratio: f64,
    /// Upper bound for one query.
    pub query_timeout: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            backend: BackendChoice::Auto,
            low_memory_ratio: DEFAULT_LOW_MEMORY_RATIO,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }
}

impl RuntimeConfig {
    /// Validate value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.low_memory_ratio) {
            return Err(ConfigError::InvalidLowMemoryRatio(self.low_memory_ratio));
        }
        if self.query_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}
