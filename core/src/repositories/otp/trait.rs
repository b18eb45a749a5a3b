//! One-time code repository trait.
//!
//! Saving never displaces earlier codes for the same `(email, purpose)`:
//! several valid codes can coexist, lookup returns only the newest, and
//! consumption removes the whole set at once.

use async_trait::async_trait;

use crate::domain::entities::one_time_code::OneTimeCode;
use crate::errors::DomainError;

/// Repository trait for OneTimeCode persistence operations
#[async_trait]
pub trait OtpRepository: Send + Sync {
    /// Insert a new code record
    ///
    /// Prior unconsumed codes for the same `(email, purpose)` are left in
    /// place; they stay valid until the next successful consumption.
    async fn save(&self, code: OneTimeCode) -> Result<(), DomainError>;

    /// Find the newest code for `(email, purpose)` by creation time
    ///
    /// Expiry is not filtered here; the caller checks it so that an
    /// expired code can be reported distinctly.
    async fn find_latest_by_email_and_purpose(
        &self,
        email: &str,
        purpose: &str,
    ) -> Result<Option<OneTimeCode>, DomainError>;

    /// Delete all codes matching `(email, purpose)`
    ///
    /// Broad cleanup after a successful match, not a single-record
    /// transaction: unrelated still-valid codes for the purpose go too.
    async fn consume(&self, email: &str, purpose: &str) -> Result<(), DomainError>;
}
