//! User entity representing a registered phone number in the directory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A directory entry for a verified phone number
///
/// Users are created lazily: the first successful OTP validation for a
/// previously-unseen phone number registers it. The phone number is the
/// unique key; there is no separate registration step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Phone number, the unique identity key
    pub phone: String,

    /// Timestamp when the user was first registered
    pub registered_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User registered now
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            registered_at: Utc::now(),
        }
    }

    /// Creates a User with an explicit registration timestamp
    pub fn registered_at(phone: impl Into<String>, registered_at: DateTime<Utc>) -> Self {
        Self {
            phone: phone.into(),
            registered_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = User::new("+14155552671");
        assert_eq!(user.phone, "+14155552671");
        assert!(user.registered_at <= Utc::now());
    }

    #[test]
    fn test_serialization_round_trip() {
        let user = User::new("+14155552671");
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user, back);
    }
}
