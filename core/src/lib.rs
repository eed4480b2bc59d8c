//! # DialPass Core
//!
//! Core business logic and domain layer for the DialPass backend.
//! This crate contains domain entities, the OTP issuance/validation state
//! machine, the token issuer, collaborator traits for the expiring store and
//! user directory (with concurrency-safe in-memory adapters), and the error
//! taxonomy shared by every layer above.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{token::Claims, user::User};
pub use errors::{
    AuthError, DirectoryError, DomainError, DomainResult, StoreError, TokenError,
};
pub use repositories::{ExpiringStore, MemoryDirectory, MemoryStore, UserDirectory};
pub use services::{
    IssuedOtp, OtpConfig, OtpService, TokenConfig, TokenService, UserService, VerifiedSession,
};
