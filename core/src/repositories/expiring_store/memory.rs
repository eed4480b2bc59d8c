//! Mutex-guarded in-memory implementation of the expiring store.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::errors::StoreError;

use super::store::ExpiringStore;

struct Entry {
    value: String,
    expires_at: Instant,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        // A key expiring exactly now counts as expired
        self.expires_at <= now
    }
}

/// In-memory expiring store guarded by a single mutex.
///
/// Holding the lock across each read-modify-write linearizes same-key
/// sequences, which is what makes `increment_with_expiry` atomic here.
/// Expired entries are dropped lazily on access; there is no background
/// sweep.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExpiringStore for MemoryStore {
    async fn increment_with_expiry(&self, key: &str, window_secs: u64) -> Result<i64, StoreError> {
        let mut entries = self.entries.lock().await;
        let now = Instant::now();

        match entries.get_mut(key) {
            Some(entry) if !entry.is_expired(now) => {
                let count = entry.value.parse::<i64>().unwrap_or(0) + 1;
                entry.value = count.to_string();
                // The window is fixed: the expiry set at reset time stands
                Ok(count)
            }
            _ => {
                entries.insert(
                    key.to_string(),
                    Entry {
                        value: "1".to_string(),
                        expires_at: now + Duration::from_secs(window_secs),
                    },
                );
                Ok(1)
            }
        }
    }

    async fn set_with_ttl(&self, key: &str, value: &str, ttl_secs: u64) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().await;
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: Instant::now() + Duration::from_secs(ttl_secs),
            },
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<String, StoreError> {
        let mut entries = self.entries.lock().await;
        let now = Instant::now();

        match entries.get(key) {
            Some(entry) if !entry.is_expired(now) => Ok(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                Err(StoreError::NotFound)
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().await;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn test_set_get_delete() {
        let store = MemoryStore::new();

        store.set_with_ttl("k", "v", 60).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), "v");

        store.delete("k").await.unwrap();
        assert_eq!(store.get("k").await, Err(StoreError::NotFound));

        // Deleting an absent key is not an error
        store.delete("k").await.unwrap();
    }

    #[tokio::test]
    async fn test_get_never_set() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").await, Err(StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set_with_ttl("k", "first", 60).await.unwrap();
        store.set_with_ttl("k", "second", 60).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), "second");
    }

    #[tokio::test]
    async fn test_lazy_expiry_on_read() {
        let store = MemoryStore::new();
        store.set_with_ttl("k", "v", 0).await.unwrap();
        assert_eq!(store.get("k").await, Err(StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_increment_counts_within_window() {
        let store = MemoryStore::new();
        assert_eq!(store.increment_with_expiry("c", 60).await.unwrap(), 1);
        assert_eq!(store.increment_with_expiry("c", 60).await.unwrap(), 2);
        assert_eq!(store.increment_with_expiry("c", 60).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_increment_resets_after_window() {
        let store = MemoryStore::new();
        assert_eq!(store.increment_with_expiry("c", 1).await.unwrap(), 1);
        assert_eq!(store.increment_with_expiry("c", 1).await.unwrap(), 2);

        tokio::time::sleep(std::time::Duration::from_millis(1100)).await;

        // The prior window has fully elapsed, so the counter resets to 1
        assert_eq!(store.increment_with_expiry("c", 1).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_increments_are_atomic() {
        let store = Arc::new(MemoryStore::new());
        let mut handles = Vec::new();

        for _ in 0..50 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.increment_with_expiry("c", 60).await.unwrap()
            }));
        }

        let mut counts = Vec::new();
        for handle in handles {
            counts.push(handle.await.unwrap());
        }

        // Every increment observed a distinct count; exactly one saw the
        // reset branch
        counts.sort_unstable();
        assert_eq!(counts, (1..=50).collect::<Vec<i64>>());
    }
}
