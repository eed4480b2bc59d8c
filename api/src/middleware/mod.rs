//! HTTP middleware for authentication and CORS.

pub mod auth;
pub mod cors;

pub use auth::{AuthContext, RequireAuth};
