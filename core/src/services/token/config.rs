//! Token service configuration

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Process-wide secret used to sign every token
    pub secret: String,

    /// Access token time-to-live in minutes
    pub access_token_expire_minutes: i64,

    /// Refresh token time-to-live in days
    pub refresh_token_expire_days: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: String::from("your-secret-key-change-in-production"),
            access_token_expire_minutes: 30,
            refresh_token_expire_days: 7,
        }
    }
}

impl TokenConfig {
    /// Create a new configuration with the given signing secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }
}
