//! Integration tests for the Redis-backed expiring store.
//!
//! These tests require a running Redis instance and are ignored by
//! default. Run them with:
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379/0 cargo test -p dp_infra -- --ignored
//! ```

use std::time::Duration;

use dp_core::errors::StoreError;
use dp_core::repositories::ExpiringStore;
use dp_infra::{RedisClient, RedisStore};
use dp_shared::config::CacheConfig;

async fn store() -> RedisStore {
    let config = CacheConfig::from_env();
    let client = RedisClient::new(&config)
        .await
        .expect("Redis must be reachable for integration tests");
    RedisStore::new(client)
}

fn unique_key(prefix: &str) -> String {
    format!(
        "dialpass:test:{}:{}",
        prefix,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    )
}

#[tokio::test]
#[ignore = "requires a running Redis instance"]
async fn test_set_get_delete_round_trip() {
    let store = store().await;
    let key = unique_key("round-trip");

    store.set_with_ttl(&key, "123456", 60).await.unwrap();
    assert_eq!(store.get(&key).await.unwrap(), "123456");

    store.delete(&key).await.unwrap();
    assert_eq!(store.get(&key).await, Err(StoreError::NotFound));

    // Idempotent delete
    store.delete(&key).await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running Redis instance"]
async fn test_ttl_expiry_reads_as_not_found() {
    let store = store().await;
    let key = unique_key("expiry");

    store.set_with_ttl(&key, "123456", 1).await.unwrap();
    tokio::time::sleep(Duration::from_millis(1500)).await;

    assert_eq!(store.get(&key).await, Err(StoreError::NotFound));
}

#[tokio::test]
#[ignore = "requires a running Redis instance"]
async fn test_increment_counts_and_resets() {
    let store = store().await;
    let key = unique_key("counter");

    assert_eq!(store.increment_with_expiry(&key, 1).await.unwrap(), 1);
    assert_eq!(store.increment_with_expiry(&key, 1).await.unwrap(), 2);

    tokio::time::sleep(Duration::from_millis(1500)).await;

    // The window elapsed, so the counter starts over
    assert_eq!(store.increment_with_expiry(&key, 1).await.unwrap(), 1);

    store.delete(&key).await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running Redis instance"]
async fn test_concurrent_increments_observe_distinct_counts() {
    let store = std::sync::Arc::new(store().await);
    let key = unique_key("concurrent");

    let mut handles = Vec::new();
    for _ in 0..20 {
        let store = std::sync::Arc::clone(&store);
        let key = key.clone();
        handles.push(tokio::spawn(async move {
            store.increment_with_expiry(&key, 60).await.unwrap()
        }));
    }

    let mut counts = Vec::new();
    for handle in handles {
        counts.push(handle.await.unwrap());
    }
    counts.sort_unstable();
    assert_eq!(counts, (1..=20).collect::<Vec<i64>>());

    store.delete(&key).await.unwrap();
}
