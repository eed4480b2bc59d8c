//! Shared application state injected into request handlers.

use std::sync::Arc;

use dp_core::repositories::{ExpiringStore, UserDirectory};
use dp_core::services::{OtpService, TokenService, UserService};

/// Application state holding the shared services.
///
/// Generic over the store and directory adapters so the same handlers run
/// against the in-memory pair (development, tests) and the Redis/MySQL
/// pair (production).
pub struct AppState<S: ExpiringStore, D: UserDirectory> {
    /// OTP issuance and validation
    pub otp_service: Arc<OtpService<S, D>>,
    /// User directory operations
    pub user_service: Arc<UserService<D>>,
    /// Session token verification (used by the auth middleware)
    pub token_service: Arc<TokenService>,
    /// Development-only: echo issued codes in responses.
    ///
    /// There is no SMS integration, so development builds surface the code
    /// to the caller instead. Must be false in production; the code never
    /// appears in logs either way.
    pub expose_codes: bool,
}
