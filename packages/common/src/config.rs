use std::time::Duration;

use serde::Deserialize;

/// Query cache configuration shared by every cached analytic query.
#[derive(Debug, Deserialize, Clone)]
pub struct CacheConfig {
    /// Length of the expiry window in seconds. Default: 86400 (one day).
    #[serde(default = "default_cache_ttl_secs")]
    pub ttl_secs: u64,
}

fn default_cache_ttl_secs() -> u64 {
    24 * 60 * 60
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_cache_ttl_secs(),
        }
    }
}
