//! Mock implementation of OtpRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::one_time_code::OneTimeCode;
use crate::errors::DomainError;

use super::trait_::OtpRepository;

/// In-memory one-time code repository for testing
pub struct MockOtpRepository {
    codes: Arc<RwLock<Vec<OneTimeCode>>>,
    next_id: Arc<RwLock<i64>>,
}

impl MockOtpRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            codes: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }

    /// Number of stored codes, for asserting consumption behavior
    pub async fn count(&self) -> usize {
        self.codes.read().await.len()
    }
}

impl Default for MockOtpRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OtpRepository for MockOtpRepository {
    async fn save(&self, mut code: OneTimeCode) -> Result<(), DomainError> {
        let mut codes = self.codes.write().await;
        let mut next_id = self.next_id.write().await;

        code.id = Some(*next_id);
        *next_id += 1;
        codes.push(code);
        Ok(())
    }

    async fn find_latest_by_email_and_purpose(
        &self,
        email: &str,
        purpose: &str,
    ) -> Result<Option<OneTimeCode>, DomainError> {
        let codes = self.codes.read().await;
        Ok(codes
            .iter()
            .filter(|c| c.email == email && c.purpose == purpose)
            .max_by_key(|c| (c.created_at, c.id))
            .cloned())
    }

    async fn consume(&self, email: &str, purpose: &str) -> Result<(), DomainError> {
        let mut codes = self.codes.write().await;
        codes.retain(|c| !(c.email == email && c.purpose == purpose));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::one_time_code::PURPOSE_REGISTRATION;

    #[tokio::test]
    async fn test_save_keeps_older_codes() {
        let repo = MockOtpRepository::new();
        repo.save(OneTimeCode::new(1, "a@example.com", PURPOSE_REGISTRATION, "1111", 10))
            .await
            .unwrap();
        repo.save(OneTimeCode::new(1, "a@example.com", PURPOSE_REGISTRATION, "2222", 10))
            .await
            .unwrap();

        assert_eq!(repo.count().await, 2);

        let latest = repo
            .find_latest_by_email_and_purpose("a@example.com", PURPOSE_REGISTRATION)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(latest.code, "2222");
    }

    #[tokio::test]
    async fn test_consume_deletes_all_codes_for_the_purpose() {
        let repo = MockOtpRepository::new();
        repo.save(OneTimeCode::new(1, "a@example.com", PURPOSE_REGISTRATION, "1111", 10))
            .await
            .unwrap();
        repo.save(OneTimeCode::new(1, "a@example.com", PURPOSE_REGISTRATION, "2222", 10))
            .await
            .unwrap();
        repo.save(OneTimeCode::new(2, "b@example.com", PURPOSE_REGISTRATION, "3333", 10))
            .await
            .unwrap();

        repo.consume("a@example.com", PURPOSE_REGISTRATION).await.unwrap();

        assert_eq!(repo.count().await, 1);
        assert!(repo
            .find_latest_by_email_and_purpose("a@example.com", PURPOSE_REGISTRATION)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_find_latest_ignores_other_purposes() {
        let repo = MockOtpRepository::new();
        repo.save(OneTimeCode::new(1, "a@example.com", "password-reset", "1111", 10))
            .await
            .unwrap();

        let found = repo
            .find_latest_by_email_and_purpose("a@example.com", PURPOSE_REGISTRATION)
            .await
            .unwrap();
        assert!(found.is_none());
    }
}
