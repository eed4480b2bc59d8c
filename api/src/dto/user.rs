//! DTOs for the user directory endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use dp_core::domain::entities::user::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub phone: String,
    pub registered_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            phone: user.phone,
            registered_at: user.registered_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdatePhoneRequest {
    /// The new phone number in E.164 format
    #[validate(length(min = 3, max = 20))]
    pub phone: String,
}
