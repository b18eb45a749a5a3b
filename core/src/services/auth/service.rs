//! Main authentication service implementation

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::one_time_code::{OneTimeCode, PURPOSE_REGISTRATION};
use crate::domain::entities::token::TokenType;
use crate::domain::entities::user::User;
use crate::domain::value_objects::TokenPair;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::{OtpRepository, UserRepository, UserUpdate};
use crate::services::hasher;
use crate::services::notification::EmailNotifier;
use crate::services::otp::generate_code;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Authentication service composing the four user-facing flows
///
/// Each request is handled independently; no per-request state is held
/// beyond the shared store connection. Multi-step flows are not wrapped
/// in a transaction: register's account insert and code insert are two
/// independent writes, and a crash between them leaves an inactive
/// account with no pending code. That gap is accepted.
pub struct AuthService<U, O, N>
where
    U: UserRepository,
    O: OtpRepository,
    N: EmailNotifier,
{
    /// User repository for account persistence
    user_repository: Arc<U>,
    /// One-time code repository
    otp_repository: Arc<O>,
    /// Email notifier for delivering codes
    notifier: Arc<N>,
    /// Token service for JWT issuance and verification
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, O, N> AuthService<U, O, N>
where
    U: UserRepository,
    O: OtpRepository,
    N: EmailNotifier,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        otp_repository: Arc<O>,
        notifier: Arc<N>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            otp_repository,
            notifier,
            token_service,
            config,
        }
    }

    /// Register a new account and issue a registration one-time code
    ///
    /// The account is created inactive; activation happens exactly once
    /// through [`verify_registration`](Self::verify_registration). The
    /// numeric code is returned to the caller in addition to being
    /// emailed — the API exposes it in the response body by design.
    ///
    /// Two concurrent registrations for the same email may both pass the
    /// existence check; the store's uniqueness constraint settles the
    /// race and the loser surfaces as `UserAlreadyExists`.
    pub async fn register(
        &self,
        email: &str,
        firstname: &str,
        lastname: &str,
        password: &str,
    ) -> DomainResult<u32> {
        if self.user_repository.find_by_email(email).await?.is_some() {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = hasher::hash_password(password)?;
        let user = User::new(email, firstname, lastname, password_hash);
        let user_id = self.user_repository.create(user).await?;

        let code = generate_code(self.config.otp_code_length);
        let otp = OneTimeCode::new(
            user_id,
            email,
            PURPOSE_REGISTRATION,
            code.to_string(),
            self.config.otp_expire_minutes,
        );
        self.otp_repository.save(otp).await?;

        // Fire-and-forget: a delivery failure must not fail registration
        if let Err(e) = self.notifier.send_one_time_code(email, &code.to_string()).await {
            warn!(email, error = %e, "failed to send one-time code email");
        }

        info!(email, user_id, "registered new inactive account");
        Ok(code)
    }

    /// Verify a registration one-time code and activate the account
    ///
    /// Expiry is checked before the code comparison, so an expired and
    /// mismatched code always reports as expired. On success every
    /// registration code for the email is consumed, the account is
    /// activated and a fresh token pair is returned.
    pub async fn verify_registration(&self, email: &str, submitted_code: &str) -> DomainResult<TokenPair> {
        let record = self
            .otp_repository
            .find_latest_by_email_and_purpose(email, PURPOSE_REGISTRATION)
            .await?
            .ok_or(AuthError::InvalidOtp)?;

        if record.is_expired() {
            return Err(AuthError::OtpExpired.into());
        }

        if !record.matches(submitted_code) {
            return Err(AuthError::InvalidOtp.into());
        }

        // Defensive: the owning account should always exist
        let user = self
            .user_repository
            .find_by_id(record.user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;
        let user_id = user.require_id()?;

        self.otp_repository.consume(&user.email, PURPOSE_REGISTRATION).await?;
        self.user_repository.update(user_id, UserUpdate::activate()).await?;

        info!(email, user_id, "account verified and activated");
        self.token_service.generate_token_pair(user_id, &user.email)
    }

    /// Authenticate by email and password
    ///
    /// An unknown email and a wrong password yield the same
    /// `InvalidCredentials`, with no signal to distinguish them.
    /// The active flag is not checked here; an unverified account can
    /// still log in. See DESIGN.md for why this is preserved.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<TokenPair> {
        let user = self.user_repository.find_by_email(email).await?;

        let Some(user) = user else {
            return Err(AuthError::InvalidCredentials.into());
        };
        if !hasher::verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let user_id = user.require_id()?;
        info!(email, user_id, "login succeeded");
        self.token_service.generate_token_pair(user_id, &user.email)
    }

    /// Exchange a refresh token for a new token pair
    ///
    /// The token must verify, carry the `refresh` type, name both a
    /// subject id and an email, and resolve to an existing account. The
    /// previous refresh token is not revoked; it stays valid until its
    /// own expiry since there is no revocation store.
    pub async fn refresh_token(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        let claims = self
            .token_service
            .verify_token(refresh_token)
            .ok_or(AuthError::InvalidToken)?;

        // The sole type-confusion guard: a well-formed access token is
        // rejected here
        if claims.token_type != TokenType::Refresh {
            return Err(AuthError::InvalidToken.into());
        }
        if claims.email.is_empty() {
            return Err(AuthError::InvalidToken.into());
        }
        let user_id = claims.user_id().ok_or(AuthError::InvalidToken)?;

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::InvalidToken)?;
        let user_id = user.require_id()?;

        self.token_service.generate_token_pair(user_id, &user.email)
    }

    /// Resolve the account behind a bearer token
    ///
    /// Either token kind is accepted here; only the refresh flow is
    /// type-gated.
    pub async fn authenticated_user(&self, token: &str) -> DomainResult<User> {
        let claims = self
            .token_service
            .verify_token(token)
            .ok_or(AuthError::InvalidToken)?;
        let user_id = claims.user_id().ok_or(AuthError::InvalidToken)?;

        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AuthError::InvalidToken.into())
    }
}
