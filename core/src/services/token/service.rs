//! Main token service implementation

use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

use crate::domain::entities::token::{Claims, TokenType};
use crate::domain::value_objects::TokenPair;
use crate::errors::{DomainError, DomainResult};

use super::config::TokenConfig;

/// Service issuing and verifying signed, expiring tokens
///
/// Tokens carry `{sub, email, type, exp}` and are signed with a
/// process-wide secret using HS256. Nothing is persisted.
pub struct TokenService {
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from the given configuration
    pub fn new(config: TokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // No leeway window: an expiry one instant in the past is invalid
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues an access token for the given subject
    ///
    /// A signing failure is propagated; the service never hands back an
    /// unsigned token.
    pub fn generate_access_token(&self, user_id: i64, email: &str) -> DomainResult<String> {
        let claims = Claims::new(
            user_id,
            email,
            TokenType::Access,
            Duration::minutes(self.config.access_token_expire_minutes),
        );
        self.encode(&claims)
    }

    /// Issues a refresh token for the given subject
    pub fn generate_refresh_token(&self, user_id: i64, email: &str) -> DomainResult<String> {
        let claims = Claims::new(
            user_id,
            email,
            TokenType::Refresh,
            Duration::days(self.config.refresh_token_expire_days),
        );
        self.encode(&claims)
    }

    /// Issues a fresh access and refresh token pair
    pub fn generate_token_pair(&self, user_id: i64, email: &str) -> DomainResult<TokenPair> {
        let access_token = self.generate_access_token(user_id, email)?;
        let refresh_token = self.generate_refresh_token(user_id, email)?;
        Ok(TokenPair::new(access_token, refresh_token))
    }

    /// Verifies a token's signature and expiry
    ///
    /// Returns `None` for a malformed token, a bad signature, or an
    /// expired token alike; callers cannot and must not distinguish
    /// these cases.
    pub fn verify_token(&self, token: &str) -> Option<Claims> {
        match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                debug!(error = %e, "token verification failed");
                None
            }
        }
    }

    fn encode(&self, claims: &Claims) -> DomainResult<String> {
        encode(&Header::default(), claims, &self.encoding_key).map_err(|e| {
            DomainError::Internal {
                message: format!("Token signing failed: {}", e),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(TokenConfig::new("test-secret"))
    }

    #[test]
    fn test_access_token_round_trip() {
        let service = service();
        let token = service.generate_access_token(7, "alice@example.com").unwrap();

        let claims = service.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.token_type, TokenType::Access);
    }

    #[test]
    fn test_refresh_token_carries_refresh_type() {
        let service = service();
        let token = service.generate_refresh_token(7, "alice@example.com").unwrap();

        let claims = service.verify_token(&token).unwrap();
        assert_eq!(claims.token_type, TokenType::Refresh);
    }

    #[test]
    fn test_token_pair() {
        let service = service();
        let pair = service.generate_token_pair(7, "alice@example.com").unwrap();

        assert_eq!(pair.token_type, "bearer");
        let access = service.verify_token(&pair.access_token).unwrap();
        let refresh = service.verify_token(&pair.refresh_token).unwrap();
        assert_eq!(access.token_type, TokenType::Access);
        assert_eq!(refresh.token_type, TokenType::Refresh);
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let config = TokenConfig {
            secret: "test-secret".to_string(),
            access_token_expire_minutes: -1,
            refresh_token_expire_days: 7,
        };
        let service = TokenService::new(config);
        let token = service.generate_access_token(7, "alice@example.com").unwrap();

        assert!(service.verify_token(&token).is_none());
    }

    #[test]
    fn test_tampered_token_is_invalid() {
        let service = service();
        let token = service.generate_access_token(7, "alice@example.com").unwrap();

        let mut tampered = token.clone();
        tampered.pop();
        assert!(service.verify_token(&tampered).is_none());
        assert!(service.verify_token("not.a.jwt").is_none());
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let issuer = service();
        let token = issuer.generate_access_token(7, "alice@example.com").unwrap();

        let other = TokenService::new(TokenConfig::new("different-secret"));
        assert!(other.verify_token(&token).is_none());
    }
}
