//! OTP issuance and validation configuration module

use serde::{Deserialize, Serialize};

use super::env_or;

/// OTP issuance and validation limits
///
/// The defaults are the authoritative deployment constants: 3 code requests
/// per 600-second window, 120-second code lifetime, and 5 failed validation
/// attempts before lockout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Maximum OTP requests per phone within one window
    pub request_cap: u32,
    /// Request-rate window in seconds
    pub request_window_secs: u64,
    /// OTP code time-to-live in seconds
    pub code_ttl_secs: u64,
    /// Failed validation attempts allowed before lockout
    pub max_failed_attempts: u32,
    /// Lifetime of the failed-attempt counter in seconds
    pub attempt_ttl_secs: u64,
}

impl AuthConfig {
    /// Load OTP limits from `OTP_*` environment variables.
    pub fn from_env() -> Self {
        Self {
            request_cap: env_or("OTP_REQUEST_CAP", 3),
            request_window_secs: env_or("OTP_REQUEST_WINDOW", 600),
            code_ttl_secs: env_or("OTP_EXPIRY", 120),
            max_failed_attempts: env_or("OTP_MAX_ATTEMPTS", 5),
            attempt_ttl_secs: env_or("OTP_ATTEMPT_TTL", 1800),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            request_cap: 3,
            request_window_secs: 600,
            code_ttl_secs: 120,
            max_failed_attempts: 5,
            attempt_ttl_secs: 1800,
        }
    }
}
