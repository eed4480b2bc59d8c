//! Error taxonomy for the authentication core
//!
//! Every fallible core operation returns a closed set of tagged variants so
//! callers can exhaustively branch without string matching. All variants are
//! recoverable at the boundary; none are fatal to the process.

use thiserror::Error;

/// Failures of the expiring key-value store
///
/// `NotFound` covers both keys that were never set and keys whose TTL has
/// elapsed (lazy expiry is checked on read). An I/O failure of the backing
/// store always surfaces as `Unavailable`, never as `NotFound`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("key not found or expired")]
    NotFound,

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Failures of the user directory
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("user not found")]
    NotFound,

    #[error("phone number already registered")]
    AlreadyExists,

    #[error("directory unavailable: {0}")]
    Unavailable(String),
}

/// Failures of token issuance and verification
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,

    #[error("invalid token")]
    Invalid,

    #[error("token signing failed")]
    SigningFailure,
}

/// Outcomes of the OTP request/validate operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("too many code requests, try again later")]
    RateLimited,

    #[error("no active verification code for this phone")]
    OtpNotFound,

    #[error("incorrect verification code")]
    OtpInvalid,

    #[error("verification code expired")]
    OtpExpired,

    #[error("too many failed attempts, request a new code later")]
    TooManyAttempts,

    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("directory unavailable: {0}")]
    DirectoryUnavailable(String),

    #[error(transparent)]
    Token(#[from] TokenError),
}

/// Umbrella error for layers that handle more than one failure domain
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_unavailable_is_not_not_found() {
        let unavailable = StoreError::Unavailable("connection refused".to_string());
        assert_ne!(unavailable, StoreError::NotFound);
        assert!(unavailable.to_string().contains("connection refused"));
    }

    #[test]
    fn test_token_error_bridges_into_auth_error() {
        let err: AuthError = TokenError::SigningFailure.into();
        assert_eq!(err, AuthError::Token(TokenError::SigningFailure));
        assert_eq!(err.to_string(), "token signing failed");
    }

    #[test]
    fn test_domain_error_is_transparent() {
        let err: DomainError = AuthError::RateLimited.into();
        assert_eq!(err.to_string(), "too many code requests, try again later");
    }
}
