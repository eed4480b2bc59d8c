//! Application factory wiring routes, middleware, and state.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error, HttpResponse,
};

use dp_core::repositories::{ExpiringStore, UserDirectory};
use dp_shared::errors::{error_codes, ErrorResponse};

use crate::middleware::{cors, RequireAuth};
use crate::routes;
use crate::state::AppState;

/// Build the actix application over the injected adapters.
///
/// The same factory serves development (in-memory adapters), production
/// (Redis + MySQL), and the integration tests.
pub fn create_app<S, D>(
    state: web::Data<AppState<S, D>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    S: ExpiringStore + 'static,
    D: UserDirectory + 'static,
{
    let token_service = state.token_service.clone();

    App::new()
        .app_data(state)
        .wrap(Logger::default())
        .wrap(cors::create_cors())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/request-otp", web::post().to(routes::auth::request_otp::<S, D>))
                        .route("/verify-otp", web::post().to(routes::auth::verify_otp::<S, D>)),
                )
                .service(
                    web::scope("/users")
                        .wrap(RequireAuth::new(token_service))
                        .route("/me", web::get().to(routes::users::me::<S, D>))
                        .route("", web::get().to(routes::users::list_users::<S, D>))
                        .route("/{phone}", web::get().to(routes::users::get_user::<S, D>))
                        .route("/{phone}", web::put().to(routes::users::update_user::<S, D>))
                        .route(
                            "/{phone}",
                            web::delete().to(routes::users::delete_user::<S, D>),
                        ),
                ),
        )
        .default_service(web::route().to(not_found))
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "dialpass-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
