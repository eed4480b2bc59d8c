//! Redis cache configuration module

use serde::{Deserialize, Serialize};

use super::{env_or, env_or_string};

/// Redis cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,
    /// Maximum number of retry attempts for transient failures
    pub max_retries: u32,
    /// Base delay between retries in milliseconds (exponential backoff)
    pub retry_delay_ms: u64,
}

impl CacheConfig {
    /// Load cache settings from `REDIS_URL` and retry-tuning variables.
    pub fn from_env() -> Self {
        Self {
            url: env_or_string("REDIS_URL", "redis://localhost:6379/0"),
            max_retries: env_or("REDIS_MAX_RETRIES", 3),
            retry_delay_ms: env_or("REDIS_RETRY_DELAY_MS", 100),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379/0".to_string(),
            max_retries: 3,
            retry_delay_ms: 100,
        }
    }
}
