//! CORS configuration for the API.

use actix_cors::Cors;
use actix_web::http::header;

/// Build the CORS middleware for API routes
pub fn create_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(3600)
}
