//! Error-to-HTTP mapping shared by all route handlers.

mod error;

pub use error::{to_response, validation_error};
