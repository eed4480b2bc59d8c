//! Token signing configuration module

use serde::{Deserialize, Serialize};

use super::{env_or, env_or_string};

/// Token signing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// HMAC signing secret
    pub secret: String,
    /// Token time-to-live in seconds
    pub ttl_secs: u64,
    /// Token issuer claim
    pub issuer: String,
}

impl JwtConfig {
    /// Load token settings from `JWT_SECRET` / `JWT_TTL` / `JWT_ISSUER`.
    ///
    /// The default secret exists only so development servers start without
    /// a `.env` file; production deployments must set `JWT_SECRET`.
    pub fn from_env() -> Self {
        Self {
            secret: env_or_string("JWT_SECRET", "development-secret-please-change"),
            ttl_secs: env_or("JWT_TTL", 86_400),
            issuer: env_or_string("JWT_ISSUER", "dialpass"),
        }
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "development-secret-please-change".to_string(),
            ttl_secs: 86_400,
            issuer: "dialpass".to_string(),
        }
    }
}
