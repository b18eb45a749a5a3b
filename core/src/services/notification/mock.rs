//! Mock email notifier for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::DomainError;

use super::EmailNotifier;

/// Recording notifier for tests
///
/// Stores every `(email, code)` pair instead of sending anything, and
/// can be flipped into a failing mode to exercise the fire-and-forget
/// contract.
pub struct MockEmailNotifier {
    sent: Arc<RwLock<Vec<(String, String)>>>,
    fail: bool,
}

impl MockEmailNotifier {
    /// Create a new recording notifier
    pub fn new() -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
            fail: false,
        }
    }

    /// Create a notifier whose every send fails
    pub fn failing() -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
            fail: true,
        }
    }

    /// All `(email, code)` pairs sent so far
    pub async fn sent(&self) -> Vec<(String, String)> {
        self.sent.read().await.clone()
    }
}

impl Default for MockEmailNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailNotifier for MockEmailNotifier {
    async fn send_one_time_code(&self, email: &str, code: &str) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::Internal {
                message: "simulated email failure".to_string(),
            });
        }
        let mut sent = self.sent.write().await;
        sent.push((email.to_string(), code.to_string()));
        Ok(())
    }
}
