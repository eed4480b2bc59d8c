//! HTTP server configuration module

use serde::{Deserialize, Serialize};

use super::{env_or, env_or_string};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Number of actix workers (0 means one per core)
    pub workers: usize,
}

impl ServerConfig {
    /// Load server settings from `SERVER_HOST` / `SERVER_PORT` / `SERVER_WORKERS`.
    pub fn from_env() -> Self {
        Self {
            host: env_or_string("SERVER_HOST", "127.0.0.1"),
            port: env_or("SERVER_PORT", 8080),
            workers: env_or("SERVER_WORKERS", 0),
        }
    }

    /// The `host:port` address string for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: 0,
        }
    }
}
