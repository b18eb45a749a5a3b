//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};

use super::trait_::{UserRepository, UserUpdate};

/// In-memory user repository for testing
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<i64, User>>>,
    next_id: Arc<RwLock<i64>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, mut user: User) -> Result<i64, DomainError> {
        let mut users = self.users.write().await;

        // Uniqueness constraint lives in the store
        if users.values().any(|u| u.email == user.email) {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let mut next_id = self.next_id.write().await;
        let id = *next_id;
        *next_id += 1;

        user.id = Some(id);
        users.insert(id, user);
        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn update(&self, id: i64, update: UserUpdate) -> Result<Option<User>, DomainError> {
        let mut users = self.users.write().await;

        let Some(user) = users.get_mut(&id) else {
            return Ok(None);
        };

        if update.is_empty() {
            return Ok(Some(user.clone()));
        }

        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(firstname) = update.firstname {
            user.firstname = firstname;
        }
        if let Some(lastname) = update.lastname {
            user.lastname = lastname;
        }
        if let Some(password_hash) = update.password_hash {
            user.password_hash = password_hash;
        }
        if let Some(is_active) = update.is_active {
            user.is_active = is_active;
        }

        Ok(Some(user.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = MockUserRepository::new();

        let a = repo
            .create(User::new("a@example.com", "Ann", "Ames", "hash"))
            .await
            .unwrap();
        let b = repo
            .create(User::new("b@example.com", "Bob", "Best", "hash"))
            .await
            .unwrap();

        assert_eq!(a, 1);
        assert_eq!(b, 2);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_email() {
        let repo = MockUserRepository::new();
        repo.create(User::new("a@example.com", "Ann", "Ames", "hash"))
            .await
            .unwrap();

        let err = repo
            .create(User::new("a@example.com", "Ann", "Ames", "hash"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Auth(AuthError::UserAlreadyExists)
        ));
    }

    #[tokio::test]
    async fn test_empty_update_returns_unchanged_user() {
        let repo = MockUserRepository::new();
        let id = repo
            .create(User::new("a@example.com", "Ann", "Ames", "hash"))
            .await
            .unwrap();

        let user = repo.update(id, UserUpdate::default()).await.unwrap().unwrap();
        assert_eq!(user.email, "a@example.com");
        assert!(!user.is_active);
    }

    #[tokio::test]
    async fn test_update_unknown_id_returns_none() {
        let repo = MockUserRepository::new();
        let result = repo.update(99, UserUpdate::activate()).await.unwrap();
        assert!(result.is_none());
    }
}
