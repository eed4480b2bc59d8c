//! Handler for GET /api/v1/users

use actix_web::{web, HttpResponse};

use dp_core::errors::DomainError;
use dp_core::repositories::{ExpiringStore, UserDirectory};
use dp_shared::types::ListQuery;

use crate::dto::user::UserResponse;
use crate::handlers::to_response;
use crate::state::AppState;

/// Paginated directory listing with optional phone-substring search
pub async fn list_users<S, D>(
    state: web::Data<AppState<S, D>>,
    query: web::Query<ListQuery>,
) -> HttpResponse
where
    S: ExpiringStore + 'static,
    D: UserDirectory + 'static,
{
    match state.user_service.list(query.into_inner()).await {
        Ok(page) => HttpResponse::Ok().json(page.map(UserResponse::from)),
        Err(error) => to_response(&DomainError::from(error)),
    }
}
