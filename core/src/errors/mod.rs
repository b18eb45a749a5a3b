//! Domain-specific error types and error handling.
//!
//! Business-rule failures (`AuthError`) are kept apart from store
//! connectivity failures (`DomainError::Database`): a broken connection
//! must never be reported to a caller as "not found" or "invalid".

use thiserror::Error;

/// Authentication-related errors
///
/// These errors are user-facing; the HTTP layer maps each variant to a
/// 4xx response. None are retried internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("User with this email already exists")]
    UserAlreadyExists,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid OTP code")]
    InvalidOtp,

    #[error("OTP code has expired")]
    OtpExpired,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("User not found")]
    UserNotFound,
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// Business-rule failure, surfaced to the caller
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Store connectivity or query failure; unrecoverable for the request
    #[error("Database error: {message}")]
    Database { message: String },

    /// Hashing, signing or other infrastructure failure
    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Returns the inner auth error, if this is a business-rule failure
    pub fn as_auth(&self) -> Option<&AuthError> {
        match self {
            DomainError::Auth(e) => Some(e),
            _ => None,
        }
    }
}
