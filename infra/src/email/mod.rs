//! Email delivery.
//!
//! Production delivery would sit behind the same [`EmailNotifier`]
//! trait; the logging notifier stands in for it during development, the
//! way the reference deployment runs.

use async_trait::async_trait;
use tracing::info;

use account_core::errors::DomainError;
use account_core::services::notification::EmailNotifier;

/// Notifier that writes codes to the log instead of sending mail
///
/// The log line is the delivery channel here, so the code itself is
/// emitted on purpose.
pub struct LogEmailNotifier;

impl LogEmailNotifier {
    /// Create a new logging notifier
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEmailNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailNotifier for LogEmailNotifier {
    async fn send_one_time_code(&self, email: &str, code: &str) -> Result<(), DomainError> {
        info!(email, code, "sending one-time code");
        Ok(())
    }
}
