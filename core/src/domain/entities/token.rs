//! Token claims for JWT-based session credentials.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Claims structure for the JWT payload
///
/// Sessions are stateless: validity is fully determined by the signature
/// and `exp` at verification time. There is no revocation list; rotating
/// the signing secret is the only revocation mechanism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the verified phone number)
    pub sub: String,

    /// Issued at timestamp (unix seconds)
    pub iat: i64,

    /// Expiration timestamp (unix seconds)
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Creates new claims for a session token
    pub fn new(subject: impl Into<String>, ttl_secs: u64, issuer: impl Into<String>) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(ttl_secs as i64);

        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.into(),
        }
    }

    /// The verified phone number this token asserts
    pub fn subject(&self) -> &str {
        &self.sub
    }

    /// Checks whether the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims() {
        let claims = Claims::new("+14155552671", 3600, "dialpass");
        assert_eq!(claims.subject(), "+14155552671");
        assert_eq!(claims.iss, "dialpass");
        assert_eq!(claims.exp - claims.iat, 3600);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_zero_ttl_is_expired() {
        let claims = Claims::new("+14155552671", 0, "dialpass");
        assert!(claims.is_expired());
    }
}
