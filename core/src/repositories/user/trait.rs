//! User repository trait defining the interface for account persistence.
//!
//! The trait is async-first and uses Result types for error handling.
//! Email uniqueness is enforced by the store, not by this layer; two
//! concurrent registrations for the same email may both pass an
//! existence check and race to the store's constraint.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Allow-listed set of updatable account fields
///
/// Only the fields present here can ever be written by an update; in
/// particular `is_active` is mutated solely through this explicit path,
/// never through a free-form field map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub password_hash: Option<String>,
    pub is_active: Option<bool>,
}

impl UserUpdate {
    /// An update that activates the account and changes nothing else
    pub fn activate() -> Self {
        Self {
            is_active: Some(true),
            ..Default::default()
        }
    }

    /// True when no field is set; such an update performs no write
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.firstname.is_none()
            && self.lastname.is_none()
            && self.password_hash.is_none()
            && self.is_active.is_none()
    }
}

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user
    ///
    /// # Returns
    /// * `Ok(id)` - The store-assigned identifier
    /// * `Err(DomainError::Auth(AuthError::UserAlreadyExists))` - Email uniqueness violated
    /// * `Err(DomainError::Database)` - Store failure
    async fn create(&self, user: User) -> Result<i64, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Find a user by email (exact, case-sensitive as stored)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Apply an allow-listed partial update
    ///
    /// # Returns
    /// * `Ok(Some(user))` - The account after the update; unchanged (and
    ///   unwritten) when `update` is empty
    /// * `Ok(None)` - No account with the given id
    /// * `Err(DomainError)` - Store failure
    async fn update(&self, id: i64, update: UserUpdate) -> Result<Option<User>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_update_empty() {
        assert!(UserUpdate::default().is_empty());
        assert!(!UserUpdate::activate().is_empty());
    }

    #[test]
    fn test_activate_sets_only_the_active_flag() {
        let update = UserUpdate::activate();
        assert_eq!(update.is_active, Some(true));
        assert!(update.email.is_none());
        assert!(update.password_hash.is_none());
    }
}
