//! Collaborator interfaces consumed by the core services.
//!
//! The traits here are the seams between the core and its infrastructure:
//! an expiring key-value store for OTP/rate-limit state and a user
//! directory for registered phone numbers. Each ships with a
//! concurrency-safe in-memory adapter; external-store adapters live in the
//! infra crate. The chosen adapter is injected at construction rather than
//! reached through process-wide singletons.

pub mod expiring_store;
pub mod user;

pub use expiring_store::{ExpiringStore, MemoryStore};
pub use user::{MemoryDirectory, UserDirectory};
