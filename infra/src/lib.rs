//! # DialPass Infrastructure Layer
//!
//! Concrete implementations of the core collaborator traits:
//! - **Cache**: Redis-backed expiring store for OTP codes and counters
//! - **Database**: MySQL-backed user directory using SQLx
//!
//! Both adapters translate their transport errors into the core taxonomy
//! (`StoreError::Unavailable`, `DirectoryError::Unavailable`) so outages
//! are never mistaken for absent data.

pub mod cache;
pub mod database;

pub use cache::{RedisClient, RedisStore};
pub use database::{DatabasePool, MySqlDirectory};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfraError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
