//! One-time code entity for email-based verification.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Purpose tag for codes issued during registration
pub const PURPOSE_REGISTRATION: &str = "registration";

/// One-time code sent by email to prove address ownership
///
/// A code is valid strictly while `now < expires_at`. There is no attempt
/// counter: failed matches do not consume the code, only an explicit
/// delete removes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneTimeCode {
    /// Unique identifier, assigned by the store on creation
    pub id: Option<i64>,

    /// Id of the account this code belongs to
    pub user_id: i64,

    /// Email address the code was sent to
    pub email: String,

    /// Purpose tag, e.g. "registration"
    pub purpose: String,

    /// The numeric code, stored as a string to preserve leading zeros
    pub code: String,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,
}

impl OneTimeCode {
    /// Creates a new one-time code expiring `expire_minutes` from now
    pub fn new(
        user_id: i64,
        email: impl Into<String>,
        purpose: impl Into<String>,
        code: impl Into<String>,
        expire_minutes: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            user_id,
            email: email.into(),
            purpose: purpose.into(),
            code: code.into(),
            expires_at: now + Duration::minutes(expire_minutes),
            created_at: now,
        }
    }

    /// Checks if the code has expired
    ///
    /// An expiry one instant in the past is already invalid.
    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now()
    }

    /// Checks if the submitted code matches this record
    ///
    /// Exact string equality; expiry is checked separately by the caller
    /// so that an expired code always reports as expired.
    pub fn matches(&self, submitted: &str) -> bool {
        self.code == submitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_code() {
        let otp = OneTimeCode::new(1, "alice@example.com", PURPOSE_REGISTRATION, "4821", 10);

        assert_eq!(otp.id, None);
        assert_eq!(otp.user_id, 1);
        assert_eq!(otp.email, "alice@example.com");
        assert_eq!(otp.purpose, "registration");
        assert_eq!(otp.code, "4821");
        assert!(!otp.is_expired());
        assert_eq!(otp.expires_at, otp.created_at + Duration::minutes(10));
    }

    #[test]
    fn test_expired_code() {
        let mut otp = OneTimeCode::new(1, "alice@example.com", PURPOSE_REGISTRATION, "4821", 10);
        otp.expires_at = Utc::now() - Duration::seconds(1);

        assert!(otp.is_expired());
        // Expiry does not change the match outcome; the caller checks
        // expiry first.
        assert!(otp.matches("4821"));
    }

    #[test]
    fn test_matches_is_exact_string_equality() {
        let otp = OneTimeCode::new(1, "alice@example.com", PURPOSE_REGISTRATION, "0421", 10);

        assert!(otp.matches("0421"));
        assert!(!otp.matches("421"));
        assert!(!otp.matches("0422"));
    }
}
