//! Main OTP service implementation

use std::sync::Arc;

use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, Rng};

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DirectoryError, StoreError};
use crate::repositories::{ExpiringStore, UserDirectory};
use crate::services::token::TokenService;
use dp_shared::utils::phone::mask_phone;

use super::config::OtpConfig;
use super::types::{IssuedOtp, VerifiedSession};

/// Length of generated verification codes
pub const CODE_LENGTH: usize = 6;

/// OTP issuance and validation service
///
/// Per phone number the service derives three store keys: the live code,
/// the request-rate counter, and the failed-attempt counter. The service
/// exclusively owns the lifecycle of all three; the store only provides
/// raw TTL primitives. The service itself is stateless and is shared
/// across request handlers behind `Arc`.
pub struct OtpService<S: ExpiringStore, D: UserDirectory> {
    /// Expiring store for codes and counters
    store: Arc<S>,
    /// Directory of registered users
    directory: Arc<D>,
    /// Issuer of session tokens
    tokens: Arc<TokenService>,
    /// Service configuration
    config: OtpConfig,
}

impl<S: ExpiringStore, D: UserDirectory> OtpService<S, D> {
    /// Create a new OTP service
    pub fn new(
        store: Arc<S>,
        directory: Arc<D>,
        tokens: Arc<TokenService>,
        config: OtpConfig,
    ) -> Self {
        Self {
            store,
            directory,
            tokens,
            config,
        }
    }

    /// Request a verification code for a phone number
    ///
    /// Counts the request against the phone's rate window first; a request
    /// over the cap is rejected without generating or storing a code (the
    /// increment already spent is not rolled back). Otherwise a fresh code
    /// overwrites any prior unconsumed code for this phone.
    ///
    /// The returned code goes to the caller, who decides on delivery;
    /// it must never be written to production responses or logs.
    pub async fn request_code(&self, phone: &str) -> Result<IssuedOtp, AuthError> {
        let count = self
            .store
            .increment_with_expiry(&requests_key(phone), self.config.request_window_secs)
            .await
            .map_err(store_unavailable)?;

        if count > self.config.request_cap as i64 {
            tracing::warn!(
                phone = %mask_phone(phone),
                count,
                event = "otp_rate_limited",
                "OTP request rate limit exceeded"
            );
            return Err(AuthError::RateLimited);
        }

        let code = Self::generate_code();

        self.store
            .set_with_ttl(&code_key(phone), &code, self.config.code_ttl_secs)
            .await
            .map_err(store_unavailable)?;

        tracing::info!(
            phone = %mask_phone(phone),
            event = "otp_issued",
            "Issued verification code"
        );

        Ok(IssuedOtp {
            code,
            expires_in_secs: self.config.code_ttl_secs,
        })
    }

    /// Validate a submitted code and establish a session
    ///
    /// The failed-attempt counter is consulted before the stored code, so a
    /// locked-out phone learns nothing about whether a code is live. On
    /// match the code is deleted before the session is built; the same code
    /// can never validate twice. On mismatch the code is kept so the user
    /// may retry until it expires or the attempt cap is hit.
    pub async fn verify_code(&self, phone: &str, submitted: &str) -> Result<VerifiedSession, AuthError> {
        let attempts = match self.store.get(&attempts_key(phone)).await {
            Ok(value) => value.parse::<u32>().unwrap_or(0),
            Err(StoreError::NotFound) => 0,
            Err(StoreError::Unavailable(message)) => {
                return Err(AuthError::StoreUnavailable(message))
            }
        };

        if attempts >= self.config.max_failed_attempts {
            tracing::warn!(
                phone = %mask_phone(phone),
                attempts,
                event = "otp_attempts_exhausted",
                "Validation blocked, too many failed attempts"
            );
            return Err(AuthError::TooManyAttempts);
        }

        let stored = match self.store.get(&code_key(phone)).await {
            Ok(code) => code,
            Err(StoreError::NotFound) => return Err(AuthError::OtpNotFound),
            Err(StoreError::Unavailable(message)) => {
                return Err(AuthError::StoreUnavailable(message))
            }
        };

        if !codes_match(&stored, submitted) {
            // Best effort: a failed bump must not mask the mismatch result
            if let Err(e) = self
                .store
                .increment_with_expiry(&attempts_key(phone), self.config.attempt_ttl_secs)
                .await
            {
                tracing::warn!(
                    phone = %mask_phone(phone),
                    error = %e,
                    event = "otp_attempt_tracking_failed",
                    "Failed to record failed validation attempt"
                );
            }

            tracing::warn!(
                phone = %mask_phone(phone),
                event = "otp_invalid",
                "Verification code mismatch"
            );
            return Err(AuthError::OtpInvalid);
        }

        // Single use: the code is gone before the session exists
        self.store
            .delete(&code_key(phone))
            .await
            .map_err(store_unavailable)?;

        if let Err(e) = self.store.delete(&attempts_key(phone)).await {
            tracing::warn!(
                phone = %mask_phone(phone),
                error = %e,
                event = "otp_attempt_reset_failed",
                "Failed to reset attempt counter after validation"
            );
        }

        let user = self.find_or_register(phone).await?;
        let token = self.tokens.issue(&user.phone)?;

        tracing::info!(
            phone = %mask_phone(phone),
            event = "otp_verified",
            "Verification succeeded, session established"
        );

        Ok(VerifiedSession {
            token,
            expires_in_secs: self.tokens.ttl_secs(),
            user,
        })
    }

    /// Look up the user, registering the phone on first validation
    async fn find_or_register(&self, phone: &str) -> Result<User, AuthError> {
        match self.directory.find_by_phone(phone).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => match self.directory.create(User::new(phone)).await {
                Ok(user) => {
                    tracing::info!(
                        phone = %mask_phone(phone),
                        event = "user_registered",
                        "Registered new user on first validation"
                    );
                    Ok(user)
                }
                // A concurrent validation won the insert; use its record
                Err(DirectoryError::AlreadyExists) => self
                    .directory
                    .find_by_phone(phone)
                    .await
                    .map_err(directory_unavailable)?
                    .ok_or_else(|| {
                        AuthError::DirectoryUnavailable(
                            "user missing after duplicate-key create".to_string(),
                        )
                    }),
                Err(e) => Err(directory_unavailable(e)),
            },
            Err(e) => Err(directory_unavailable(e)),
        }
    }

    /// Generate a uniformly random 6-digit code from the OS CSPRNG
    pub fn generate_code() -> String {
        let mut rng = OsRng;
        let code: u32 = rng.gen_range(0..1_000_000);
        format!("{:06}", code)
    }
}

fn code_key(phone: &str) -> String {
    format!("otp:code:{}", phone)
}

fn requests_key(phone: &str) -> String {
    format!("otp:requests:{}", phone)
}

fn attempts_key(phone: &str) -> String {
    format!("otp:attempts:{}", phone)
}

fn store_unavailable(e: StoreError) -> AuthError {
    AuthError::StoreUnavailable(e.to_string())
}

fn directory_unavailable(e: DirectoryError) -> AuthError {
    AuthError::DirectoryUnavailable(e.to_string())
}

/// Constant-time code comparison
fn codes_match(stored: &str, submitted: &str) -> bool {
    if stored.len() != submitted.len() {
        return false;
    }
    constant_time_eq(stored.as_bytes(), submitted.as_bytes())
}
