//! Bearer-token authentication middleware for protected endpoints.
//!
//! Extracts the token from the Authorization header, verifies it through
//! the core token service, and injects the authenticated subject into the
//! request extensions for handlers to extract. Requests without a valid
//! token are answered directly with a 401 JSON body.

use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use actix_web::{
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;

use dp_core::errors::TokenError;
use dp_core::services::TokenService;
use dp_shared::errors::{error_codes, ErrorResponse};

/// Authenticated subject injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// The verified phone number from the token's subject claim
    pub phone: String,
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(req.extensions().get::<AuthContext>().cloned().ok_or_else(|| {
            let response = HttpResponse::Unauthorized().json(ErrorResponse::new(
                error_codes::TOKEN_INVALID,
                "Authentication required",
            ));
            InternalError::from_response("Authentication required", response).into()
        }))
    }
}

/// Bearer-token authentication middleware factory
pub struct RequireAuth {
    tokens: Arc<TokenService>,
}

impl RequireAuth {
    /// Creates the middleware around the shared token service
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAuthMiddleware {
            service: Rc::new(service),
            tokens: Arc::clone(&self.tokens),
        }))
    }
}

/// Bearer-token authentication middleware service
pub struct RequireAuthMiddleware<S> {
    service: Rc<S>,
    tokens: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for RequireAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let tokens = Arc::clone(&self.tokens);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    return denied(
                        req,
                        error_codes::TOKEN_INVALID,
                        "Missing or invalid Authorization header",
                    );
                }
            };

            match tokens.verify(&token) {
                Ok(claims) => {
                    req.extensions_mut().insert(AuthContext { phone: claims.sub });
                    service
                        .call(req)
                        .await
                        .map(|res| res.map_into_left_body())
                }
                Err(TokenError::Expired) => denied(
                    req,
                    error_codes::TOKEN_EXPIRED,
                    "Session token has expired",
                ),
                Err(_) => denied(req, error_codes::TOKEN_INVALID, "Session token is invalid"),
            }
        })
    }
}

/// Pull the token out of a `Bearer {token}` Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    let header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?;
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Answer the request with a 401 without calling the inner service
fn denied<B>(
    req: ServiceRequest,
    code: &str,
    message: &str,
) -> Result<ServiceResponse<EitherBody<B>>, Error> {
    let (req, _payload) = req.into_parts();
    let response = HttpResponse::Unauthorized()
        .json(ErrorResponse::new(code, message))
        .map_into_right_body();
    Ok(ServiceResponse::new(req, response))
}
