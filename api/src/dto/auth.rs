//! DTOs for the OTP authentication endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::user::UserResponse;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RequestOtpRequest {
    /// Phone number in E.164 format (e.g. "+14155552671")
    #[validate(length(min = 3, max = 20))]
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    /// Phone number in E.164 format
    #[validate(length(min = 3, max = 20))]
    pub phone: String,

    /// 6-digit verification code
    #[validate(length(equal = 6))]
    pub otp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestOtpResponse {
    pub message: String,

    /// Seconds until the issued code expires
    pub expires_in: u64,

    /// Development-only code echo; absent in production responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpResponse {
    /// Bearer token for subsequent API access
    pub token: String,

    /// Seconds until the token expires
    pub expires_in: u64,

    /// The authenticated user record
    pub user: UserResponse,
}
