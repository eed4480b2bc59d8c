//! Redis caching layer for OTP and rate-limit state.

mod redis_client;
mod redis_store;

pub use redis_client::RedisClient;
pub use redis_store::RedisStore;
