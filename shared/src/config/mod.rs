//! Configuration types for the DialPass server
//!
//! Each config struct carries sensible development defaults and a
//! `from_env` constructor so deployments can override every knob through
//! environment variables without code changes.

mod auth;
mod cache;
mod database;
mod environment;
mod jwt;
mod server;

pub use auth::AuthConfig;
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use jwt::JwtConfig;
pub use server::ServerConfig;

use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// HTTP server settings
    pub server: ServerConfig,
    /// Relational database settings
    pub database: DatabaseConfig,
    /// Redis cache settings
    pub cache: CacheConfig,
    /// OTP issuance and validation settings
    pub auth: AuthConfig,
    /// Token signing settings
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables,
    /// falling back to development defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            auth: AuthConfig::from_env(),
            jwt: JwtConfig::from_env(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            cache: CacheConfig::default(),
            auth: AuthConfig::default(),
            jwt: JwtConfig::default(),
        }
    }
}

/// Read an environment variable, parsing it into the target type,
/// or fall back to the given default.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Read a string environment variable or fall back to the given default.
pub(crate) fn env_or_string(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
