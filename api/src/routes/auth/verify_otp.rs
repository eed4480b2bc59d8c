//! Handler for POST /api/v1/auth/verify-otp

use actix_web::{web, HttpResponse};
use validator::Validate;

use dp_core::errors::DomainError;
use dp_core::repositories::{ExpiringStore, UserDirectory};
use dp_shared::utils::phone::{is_valid_phone, mask_phone, normalize_phone};

use crate::dto::auth::{VerifyOtpRequest, VerifyOtpResponse};
use crate::handlers::{to_response, validation_error};
use crate::state::AppState;

/// Validate a submitted code and return a session token.
///
/// A first successful validation registers the phone number in the user
/// directory; subsequent logins reuse the existing record.
pub async fn verify_otp<S, D>(
    state: web::Data<AppState<S, D>>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse
where
    S: ExpiringStore + 'static,
    D: UserDirectory + 'static,
{
    if request.0.validate().is_err() {
        return validation_error("Invalid request data, check the phone and otp fields");
    }

    if !request.otp.chars().all(|c| c.is_ascii_digit()) {
        return validation_error("The otp field must be 6 digits");
    }

    let phone = normalize_phone(&request.phone);
    if !is_valid_phone(&phone) {
        return validation_error("Phone number must be in E.164 format");
    }

    match state.otp_service.verify_code(&phone, &request.otp).await {
        Ok(session) => {
            log::info!("Verified phone {}", mask_phone(&phone));

            HttpResponse::Ok().json(VerifyOtpResponse {
                token: session.token,
                expires_in: session.expires_in_secs,
                user: session.user.into(),
            })
        }
        Err(error) => {
            log::warn!("Verification failed for {}: {}", mask_phone(&phone), error);
            to_response(&DomainError::from(error))
        }
    }
}
