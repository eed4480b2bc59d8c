//! Handler for GET /api/v1/users/me

use actix_web::{web, HttpResponse};

use dp_core::errors::DomainError;
use dp_core::repositories::{ExpiringStore, UserDirectory};
use dp_shared::errors::{error_codes, ErrorResponse};

use crate::dto::user::UserResponse;
use crate::handlers::to_response;
use crate::middleware::AuthContext;
use crate::state::AppState;

/// Profile of the authenticated subject
pub async fn me<S, D>(state: web::Data<AppState<S, D>>, auth: AuthContext) -> HttpResponse
where
    S: ExpiringStore + 'static,
    D: UserDirectory + 'static,
{
    match state.user_service.get_by_phone(&auth.phone).await {
        Ok(Some(user)) => HttpResponse::Ok().json(UserResponse::from(user)),
        // Valid token but the record was deleted from the directory
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse::new(
            error_codes::USER_NOT_FOUND,
            "User no longer exists",
        )),
        Err(error) => to_response(&DomainError::from(error)),
    }
}
