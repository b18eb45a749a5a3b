//! Authentication service configuration

use crate::services::otp::DEFAULT_CODE_LENGTH;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Number of digits in a generated one-time code
    pub otp_code_length: u32,

    /// Minutes until a one-time code expires
    pub otp_expire_minutes: i64,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            otp_code_length: DEFAULT_CODE_LENGTH,
            otp_expire_minutes: 10,
        }
    }
}
