//! Maps core error variants to HTTP responses.
//!
//! Every variant maps to exactly one `(status, error_code)` pair so
//! clients can distinguish "wait" (rate limited), "retry" (wrong code),
//! and "re-request" (no live code) without parsing messages.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;

use dp_core::errors::{AuthError, DirectoryError, DomainError, StoreError, TokenError};
use dp_shared::errors::{error_codes, ErrorResponse};

/// Render a core error as its canonical HTTP response
pub fn to_response(error: &DomainError) -> HttpResponse {
    let (status, code) = status_and_code(error);
    HttpResponse::build(status).json(ErrorResponse::new(code, error.to_string()))
}

/// Render a request-shape failure as a 400 response
pub fn validation_error(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new(error_codes::VALIDATION_ERROR, message))
}

fn status_and_code(error: &DomainError) -> (StatusCode, &'static str) {
    match error {
        DomainError::Auth(e) => match e {
            AuthError::RateLimited => (StatusCode::TOO_MANY_REQUESTS, error_codes::RATE_LIMITED),
            AuthError::OtpNotFound => (StatusCode::UNAUTHORIZED, error_codes::OTP_NOT_FOUND),
            AuthError::OtpInvalid => (StatusCode::UNAUTHORIZED, error_codes::OTP_INVALID),
            AuthError::OtpExpired => (StatusCode::UNAUTHORIZED, error_codes::OTP_EXPIRED),
            AuthError::TooManyAttempts => {
                (StatusCode::TOO_MANY_REQUESTS, error_codes::TOO_MANY_ATTEMPTS)
            }
            AuthError::StoreUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, error_codes::STORE_UNAVAILABLE)
            }
            AuthError::DirectoryUnavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                error_codes::DIRECTORY_UNAVAILABLE,
            ),
            AuthError::Token(e) => token_status_and_code(e),
        },
        DomainError::Directory(e) => match e {
            DirectoryError::NotFound => (StatusCode::NOT_FOUND, error_codes::USER_NOT_FOUND),
            DirectoryError::AlreadyExists => {
                (StatusCode::CONFLICT, error_codes::USER_ALREADY_EXISTS)
            }
            DirectoryError::Unavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                error_codes::DIRECTORY_UNAVAILABLE,
            ),
        },
        DomainError::Store(e) => match e {
            StoreError::NotFound => (StatusCode::NOT_FOUND, error_codes::NOT_FOUND),
            StoreError::Unavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, error_codes::STORE_UNAVAILABLE)
            }
        },
        DomainError::Token(e) => token_status_and_code(e),
    }
}

fn token_status_and_code(error: &TokenError) -> (StatusCode, &'static str) {
    match error {
        TokenError::Expired => (StatusCode::UNAUTHORIZED, error_codes::TOKEN_EXPIRED),
        TokenError::Invalid => (StatusCode::UNAUTHORIZED, error_codes::TOKEN_INVALID),
        TokenError::SigningFailure => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::TOKEN_SIGNING_FAILURE,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_maps_to_429() {
        let (status, code) = status_and_code(&AuthError::RateLimited.into());
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(code, "RATE_LIMITED");
    }

    #[test]
    fn test_otp_failures_map_to_401() {
        for error in [
            AuthError::OtpNotFound,
            AuthError::OtpInvalid,
            AuthError::OtpExpired,
        ] {
            let (status, _) = status_and_code(&error.into());
            assert_eq!(status, StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_outages_map_to_503() {
        let (status, code) =
            status_and_code(&AuthError::StoreUnavailable("down".to_string()).into());
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(code, "STORE_UNAVAILABLE");

        let (status, _) =
            status_and_code(&DirectoryError::Unavailable("down".to_string()).into());
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_directory_conflicts() {
        let (status, _) = status_and_code(&DirectoryError::NotFound.into());
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, code) = status_and_code(&DirectoryError::AlreadyExists.into());
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(code, "USER_ALREADY_EXISTS");
    }
}
