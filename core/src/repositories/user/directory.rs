//! User directory trait defining the interface for user persistence.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DirectoryError;

/// Directory of registered users keyed by phone number.
///
/// Implementations handle the actual persistence while keeping the
/// abstraction boundary between domain and infrastructure layers. Listing
/// must be deterministic (phone ascending) so pagination is stable across
/// calls.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find a user by phone number.
    ///
    /// `Ok(None)` means the phone is not registered; an infrastructure
    /// failure is `Err(DirectoryError::Unavailable)` and must never be
    /// reported as absence.
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DirectoryError>;

    /// Create a new user. Fails with `AlreadyExists` if the phone number
    /// is already registered.
    async fn create(&self, user: User) -> Result<User, DirectoryError>;

    /// Move a user to a new phone number.
    ///
    /// Fails with `NotFound` if `phone` is not registered and with
    /// `AlreadyExists` if `new_phone` is already taken.
    async fn update_phone(&self, phone: &str, new_phone: &str) -> Result<User, DirectoryError>;

    /// Delete a user. Returns `Ok(false)` when the phone was not
    /// registered.
    async fn delete(&self, phone: &str) -> Result<bool, DirectoryError>;

    /// List users whose phone contains `search` (empty matches all),
    /// ordered by phone ascending, sliced to `[offset, offset + limit)`
    /// and clamped to the available results.
    async fn list(&self, offset: u32, limit: u32, search: &str)
        -> Result<Vec<User>, DirectoryError>;

    /// Count users whose phone contains `search`.
    async fn count(&self, search: &str) -> Result<u64, DirectoryError>;
}
