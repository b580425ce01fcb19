//! Cache configuration and tuning parameters

use crate::error::{CopseError, Result};

/// Default suggested capacity for LRU caches
pub const DEFAULT_SUGGESTED_SIZE: usize = 1024;

/// Default eviction slack, in percent of the suggested size
pub const DEFAULT_SLACK_PERCENT: u32 = 10;

/// LRU cache configuration
///
/// Eviction is batched: the cache may run over `suggested_size` by up to
/// `slack_percent`, and a `set` that crosses that line evicts back down
/// to `suggested_size`. The slack trades a small amount of memory for
/// far fewer top-level structural-sharing copies in an outer
/// immutable-update framework.
#[derive(Debug, Clone)]
pub struct LruCacheConfig {
    /// Target number of entries
    pub suggested_size: usize,

    /// Allowed overrun before eviction triggers, in percent
    pub slack_percent: u32,
}

impl Default for LruCacheConfig {
    fn default() -> Self {
        Self {
            suggested_size: DEFAULT_SUGGESTED_SIZE,
            slack_percent: DEFAULT_SLACK_PERCENT,
        }
    }
}

impl LruCacheConfig {
    /// Configuration with the given target size and default slack
    pub fn with_suggested_size(suggested_size: usize) -> Self {
        Self {
            suggested_size,
            ..Self::default()
        }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.suggested_size == 0 {
            return Err(CopseError::configuration("suggested_size must be > 0"));
        }
        if self.slack_percent > 100 {
            return Err(CopseError::configuration(
                "slack_percent must be at most 100",
            ));
        }
        Ok(())
    }
}
