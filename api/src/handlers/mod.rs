//! Cross-cutting request handling.

pub mod error;

pub use error::ApiError;
