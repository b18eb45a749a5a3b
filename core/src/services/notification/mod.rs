//! Email notification interface.
//!
//! The notifier is fire-and-forget from the orchestrator's point of
//! view: a delivery failure is logged, never propagated, and nothing is
//! retried.

pub mod mock;

pub use mock::MockEmailNotifier;

use async_trait::async_trait;

use crate::errors::DomainError;

/// Interface for delivering one-time codes by email
#[async_trait]
pub trait EmailNotifier: Send + Sync {
    /// Send a one-time code to the given address
    async fn send_one_time_code(&self, email: &str, code: &str) -> Result<(), DomainError>;
}
