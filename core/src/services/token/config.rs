//! Configuration for the token service

use dp_shared::config::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// HMAC signing secret, provided at startup
    pub secret: String,
    /// Token time-to-live in seconds
    pub ttl_secs: u64,
    /// Issuer claim written into and required from every token
    pub issuer: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: "development-secret-please-change".to_string(),
            ttl_secs: 86_400,
            issuer: "dialpass".to_string(),
        }
    }
}

impl From<&JwtConfig> for TokenConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            ttl_secs: config.ttl_secs,
            issuer: config.issuer.clone(),
        }
    }
}
