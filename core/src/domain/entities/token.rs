//! Token claims for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Discriminates access tokens from refresh tokens
///
/// An access token must never be accepted where a refresh token is
/// required, and vice versa; the orchestrator enforces this after
/// signature verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Short-lived bearer credential for ordinary requests
    Access,
    /// Longer-lived credential used solely to obtain a new token pair
    Refresh,
}

/// Claims structure for the JWT payload
///
/// Tokens are stateless: nothing is persisted, and a token is
/// reconstructible only via signature verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,

    /// Subject email
    pub email: String,

    /// Token type discriminator
    #[serde(rename = "type")]
    pub token_type: TokenType,

    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,
}

impl Claims {
    /// Creates claims for a token of the given type expiring after `ttl`
    pub fn new(user_id: i64, email: impl Into<String>, token_type: TokenType, ttl: Duration) -> Self {
        Self {
            sub: user_id.to_string(),
            email: email.into(),
            token_type,
            exp: (Utc::now() + ttl).timestamp(),
        }
    }

    /// Parses the subject back into a user id
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims() {
        let claims = Claims::new(7, "alice@example.com", TokenType::Access, Duration::minutes(30));

        assert_eq!(claims.sub, "7");
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.token_type, TokenType::Access);
        assert!(claims.exp > Utc::now().timestamp());
        assert_eq!(claims.user_id(), Some(7));
    }

    #[test]
    fn test_token_type_serialization() {
        let claims = Claims::new(1, "a@b.c", TokenType::Refresh, Duration::days(7));
        let json = serde_json::to_string(&claims).unwrap();

        assert!(json.contains("\"type\":\"refresh\""));

        let back: Claims = serde_json::from_str(&json).unwrap();
        assert_eq!(back.token_type, TokenType::Refresh);
    }

    #[test]
    fn test_user_id_parse_failure() {
        let mut claims = Claims::new(1, "a@b.c", TokenType::Access, Duration::minutes(1));
        claims.sub = "not-a-number".to_string();

        assert_eq!(claims.user_id(), None);
    }
}
