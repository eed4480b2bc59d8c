//! Configuration for the OTP service

use dp_shared::config::AuthConfig;

/// Configuration for the OTP service
///
/// The defaults match the authoritative deployment constants: 3 requests
/// per 600-second window, 120-second code lifetime, 5 failed attempts
/// before lockout, attempt counters expiring 1800 seconds after the last
/// failure.
#[derive(Debug, Clone)]
pub struct OtpConfig {
    /// Maximum OTP requests per phone within one window
    pub request_cap: u32,
    /// Request-rate window in seconds
    pub request_window_secs: u64,
    /// Code time-to-live in seconds
    pub code_ttl_secs: u64,
    /// Failed validation attempts allowed before lockout
    pub max_failed_attempts: u32,
    /// Lifetime of the failed-attempt counter in seconds
    pub attempt_ttl_secs: u64,
}

impl Default for OtpConfig {
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

impl From<&AuthConfig> for OtpConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            request_cap: config.request_cap,
            request_window_secs: config.request_window_secs,
            code_ttl_secs: config.code_ttl_secs,
            max_failed_attempts: config.max_failed_attempts,
            attempt_ttl_secs: config.attempt_ttl_secs,
        }
    }
}
