//! OTP service module for phone-based authentication
//!
//! This module owns the complete one-time-passcode workflow:
//! - request-rate limiting with a fixed counting window
//! - cryptographically random 6-digit code generation
//! - single-use validation with failed-attempt tracking
//! - lazy user registration and session-token issuance on success

mod config;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use config::OtpConfig;
pub use service::{OtpService, CODE_LENGTH};
pub use types::{IssuedOtp, VerifiedSession};
