//! Handler for DELETE /api/v1/users/{phone}

use actix_web::{web, HttpResponse};

use dp_core::errors::DomainError;
use dp_core::repositories::{ExpiringStore, UserDirectory};
use dp_shared::errors::{error_codes, ErrorResponse};

use crate::handlers::to_response;
use crate::state::AppState;

/// Remove a directory entry
pub async fn delete_user<S, D>(
    state: web::Data<AppState<S, D>>,
    path: web::Path<String>,
) -> HttpResponse
where
    S: ExpiringStore + 'static,
    D: UserDirectory + 'static,
{
    let phone = path.into_inner();

    match state.user_service.delete(&phone).await {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => HttpResponse::NotFound().json(ErrorResponse::new(
            error_codes::USER_NOT_FOUND,
            "User not found",
        )),
        Err(error) => to_response(&DomainError::from(error)),
    }
}
