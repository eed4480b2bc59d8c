//! Types for OTP service results

use crate::domain::entities::user::User;

/// Result of a successful OTP request
///
/// The caller decides whether and how to deliver the code; the service
/// never logs it.
#[derive(Debug, Clone)]
pub struct IssuedOtp {
    /// The 6-digit verification code
    pub code: String,
    /// Seconds until the code expires
    pub expires_in_secs: u64,
}

/// Result of a successful OTP validation
#[derive(Debug, Clone)]
pub struct VerifiedSession {
    /// Signed session token bound to the phone number
    pub token: String,
    /// Seconds until the token expires
    pub expires_in_secs: u64,
    /// The user record, created on first validation
    pub user: User,
}
