//! Handler for PUT /api/v1/users/{phone}

use actix_web::{web, HttpResponse};
use validator::Validate;

use dp_core::errors::DomainError;
use dp_core::repositories::{ExpiringStore, UserDirectory};
use dp_shared::utils::phone::{is_valid_phone, normalize_phone};

use crate::dto::user::{UpdatePhoneRequest, UserResponse};
use crate::handlers::{to_response, validation_error};
use crate::state::AppState;

/// Move a directory entry to a new phone number
pub async fn update_user<S, D>(
    state: web::Data<AppState<S, D>>,
    path: web::Path<String>,
    request: web::Json<UpdatePhoneRequest>,
) -> HttpResponse
where
    S: ExpiringStore + 'static,
    D: UserDirectory + 'static,
{
    if request.0.validate().is_err() {
        return validation_error("Invalid request data, check the phone field");
    }

    let new_phone = normalize_phone(&request.phone);
    if !is_valid_phone(&new_phone) {
        return validation_error("Phone number must be in E.164 format");
    }

    let phone = path.into_inner();

    match state.user_service.change_phone(&phone, &new_phone).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => to_response(&DomainError::from(error)),
    }
}
