//! Handler for POST /api/v1/auth/request-otp

use actix_web::{web, HttpResponse};
use validator::Validate;

use dp_core::errors::DomainError;
use dp_core::repositories::{ExpiringStore, UserDirectory};
use dp_shared::utils::phone::{is_valid_phone, mask_phone, normalize_phone};

use crate::dto::auth::{RequestOtpRequest, RequestOtpResponse};
use crate::handlers::{to_response, validation_error};
use crate::state::AppState;

/// Request a verification code for a phone number.
///
/// There is no SMS integration: in development the code is echoed in the
/// response body so console-based clients can complete the flow. In
/// production the response only confirms issuance.
pub async fn request_otp<S, D>(
    state: web::Data<AppState<S, D>>,
    request: web::Json<RequestOtpRequest>,
) -> HttpResponse
where
    S: ExpiringStore + 'static,
    D: UserDirectory + 'static,
{
    if request.0.validate().is_err() {
        return validation_error("Invalid request data, check the phone field");
    }

    let phone = normalize_phone(&request.phone);
    if !is_valid_phone(&phone) {
        log::warn!("Rejected OTP request for malformed phone: {}", mask_phone(&request.phone));
        return validation_error("Phone number must be in E.164 format");
    }

    match state.otp_service.request_code(&phone).await {
        Ok(issued) => {
            log::info!("Issued verification code for {}", mask_phone(&phone));

            let otp = if state.expose_codes {
                // Development-only delivery path
                Some(issued.code)
            } else {
                None
            };

            HttpResponse::Ok().json(RequestOtpResponse {
                message: "Verification code issued".to_string(),
                expires_in: issued.expires_in_secs,
                otp,
            })
        }
        Err(error) => {
            log::warn!(
                "Failed to issue verification code for {}: {}",
                mask_phone(&phone),
                error
            );
            to_response(&DomainError::from(error))
        }
    }
}
