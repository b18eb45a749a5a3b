//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned by the store on creation
    pub id: Option<i64>,

    /// Email address, unique across all accounts
    pub email: String,

    /// First name
    pub firstname: String,

    /// Last name
    pub lastname: String,

    /// Password hash; the plaintext is never stored
    pub password_hash: String,

    /// Whether the account has completed email verification
    pub is_active: bool,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new, inactive User pending email verification
    pub fn new(
        email: impl Into<String>,
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            email: email.into(),
            firstname: firstname.into(),
            lastname: lastname.into(),
            password_hash: password_hash.into(),
            is_active: false,
            created_at: Utc::now(),
        }
    }

    /// Returns the store-assigned identifier
    ///
    /// Fails for an entity that has not been persisted yet; every record
    /// loaded from the store carries an id.
    pub fn require_id(&self) -> DomainResult<i64> {
        self.id.ok_or_else(|| DomainError::Internal {
            message: "user record is missing its id".to_string(),
        })
    }

    /// Marks the account as verified
    pub fn activate(&mut self) {
        self.is_active = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_inactive() {
        let user = User::new("alice@example.com", "Alice", "Smith", "hashed");

        assert_eq!(user.id, None);
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.firstname, "Alice");
        assert_eq!(user.lastname, "Smith");
        assert_eq!(user.password_hash, "hashed");
        assert!(!user.is_active);
    }

    #[test]
    fn test_activate() {
        let mut user = User::new("alice@example.com", "Alice", "Smith", "hashed");

        assert!(!user.is_active);
        user.activate();
        assert!(user.is_active);
    }

    #[test]
    fn test_require_id() {
        let mut user = User::new("alice@example.com", "Alice", "Smith", "hashed");
        assert!(user.require_id().is_err());

        user.id = Some(42);
        assert_eq!(user.require_id().unwrap(), 42);
    }
}
