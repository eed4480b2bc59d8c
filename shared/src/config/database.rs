//! Database configuration module

use serde::{Deserialize, Serialize};

use super::{env_or, env_or_string};

/// Relational database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Connection acquire timeout in seconds
    pub connect_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Load database settings from `DATABASE_URL` and pool-tuning variables.
    pub fn from_env() -> Self {
        Self {
            url: env_or_string("DATABASE_URL", "mysql://root@localhost:3306/dialpass"),
            max_connections: env_or("DATABASE_MAX_CONNECTIONS", 10),
            connect_timeout_secs: env_or("DATABASE_CONNECT_TIMEOUT", 30),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "mysql://root@localhost:3306/dialpass".to_string(),
            max_connections: 10,
            connect_timeout_secs: 30,
        }
    }
}
