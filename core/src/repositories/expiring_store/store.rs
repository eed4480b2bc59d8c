//! Expiring key-value store trait.

use async_trait::async_trait;

use crate::errors::StoreError;

/// Generic string-to-string mapping with per-key TTL and atomic
/// increment-with-expiry.
///
/// The store has no domain knowledge of OTP codes or rate limits; it only
/// provides raw primitives. All mutable shared state the OTP core relies on
/// lives behind this trait, so implementations must synchronize internally:
/// calls for different keys proceed independently, while the
/// read-modify-write inside `increment_with_expiry` is linearized per key.
#[async_trait]
pub trait ExpiringStore: Send + Sync {
    /// Atomically increment the counter at `key`.
    ///
    /// If the key does not exist or its TTL has elapsed, the counter is
    /// reset to 1 with a fresh TTL of `window_secs`. Two concurrent
    /// increments on a fresh key must never both observe the reset branch;
    /// the returned counts are strictly increasing within a window.
    async fn increment_with_expiry(&self, key: &str, window_secs: u64) -> Result<i64, StoreError>;

    /// Unconditional upsert with absolute expiry `now + ttl_secs`.
    async fn set_with_ttl(&self, key: &str, value: &str, ttl_secs: u64) -> Result<(), StoreError>;

    /// Fetch the value at `key`.
    ///
    /// Returns `StoreError::NotFound` both when the key was never set and
    /// when its TTL has elapsed; lazy expiry checked on read is sufficient.
    /// An I/O failure surfaces as `StoreError::Unavailable`, never as
    /// `NotFound`.
    async fn get(&self, key: &str) -> Result<String, StoreError>;

    /// Delete `key`. Deleting an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;
}
