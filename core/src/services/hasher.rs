//! Password hashing and verification.
//!
//! One-way, salted and iterated via bcrypt. A fresh random salt is
//! embedded in every digest, so hashing the same password twice yields
//! different digests that both verify.

use crate::errors::{DomainError, DomainResult};

/// Hash a plaintext password
///
/// A hashing failure is fatal to the current request and is propagated,
/// never masked as a business error.
pub fn hash_password(password: &str) -> DomainResult<String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| DomainError::Internal {
        message: format!("Password hashing failed: {}", e),
    })
}

/// Verify a plaintext password against a stored digest
///
/// Returns `false` for malformed digest strings rather than erroring;
/// a bad digest is indistinguishable from a wrong password.
pub fn verify_password(password: &str, digest: &str) -> bool {
    bcrypt::verify(password, digest).unwrap_or(false)
}
