//! Shared application state.

use std::sync::Arc;

use account_core::repositories::{OtpRepository, UserRepository};
use account_core::services::auth::AuthService;
use account_core::services::notification::EmailNotifier;

/// Application state holding the shared services
pub struct AppState<U, O, N>
where
    U: UserRepository,
    O: OtpRepository,
    N: EmailNotifier,
{
    pub auth_service: Arc<AuthService<U, O, N>>,
}
