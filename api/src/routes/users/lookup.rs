//! Handler for GET /api/v1/users/{phone}

use actix_web::{web, HttpResponse};

use dp_core::errors::DomainError;
use dp_core::repositories::{ExpiringStore, UserDirectory};
use dp_shared::errors::{error_codes, ErrorResponse};

use crate::dto::user::UserResponse;
use crate::handlers::to_response;
use crate::state::AppState;

/// Look up a directory entry by phone number
pub async fn get_user<S, D>(
    state: web::Data<AppState<S, D>>,
    path: web::Path<String>,
) -> HttpResponse
where
    S: ExpiringStore + 'static,
    D: UserDirectory + 'static,
{
    let phone = path.into_inner();

    match state.user_service.get_by_phone(&phone).await {
        Ok(Some(user)) => HttpResponse::Ok().json(UserResponse::from(user)),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse::new(
            error_codes::USER_NOT_FOUND,
            "User not found",
        )),
        Err(error) => to_response(&DomainError::from(error)),
    }
}
