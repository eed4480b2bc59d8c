//! Redis-backed implementation of the expiring store trait.

use async_trait::async_trait;
use redis::RedisError;

use dp_core::errors::StoreError;
use dp_core::repositories::ExpiringStore;

use super::redis_client::RedisClient;

/// Expiring store adapter over the Redis client.
///
/// Redis owns TTL enforcement: an expired key reads back as absent, which
/// maps to `StoreError::NotFound`. Transport failures map to
/// `StoreError::Unavailable` and are never reported as missing keys.
#[derive(Clone)]
pub struct RedisStore {
    client: RedisClient,
}

impl RedisStore {
    /// Create a new store over an established Redis client
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ExpiringStore for RedisStore {
    async fn increment_with_expiry(&self, key: &str, window_secs: u64) -> Result<i64, StoreError> {
        self.client
            .incr_with_window(key, window_secs)
            .await
            .map_err(unavailable)
    }

    async fn set_with_ttl(&self, key: &str, value: &str, ttl_secs: u64) -> Result<(), StoreError> {
        self.client
            .set_with_expiry(key, value, ttl_secs)
            .await
            .map_err(unavailable)
    }

    async fn get(&self, key: &str) -> Result<String, StoreError> {
        match self.client.get(key).await {
            Ok(Some(value)) => Ok(value),
            Ok(None) => Err(StoreError::NotFound),
            Err(e) => Err(unavailable(e)),
        }
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.client.delete(key).await.map_err(unavailable)
    }
}

fn unavailable(e: RedisError) -> StoreError {
    StoreError::Unavailable(e.to_string())
}
