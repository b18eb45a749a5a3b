//! Authenticated profile endpoint.

use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};

use account_core::errors::{AuthError, DomainError};
use account_core::repositories::{OtpRepository, UserRepository};
use account_core::services::notification::EmailNotifier;

use crate::dto::user::UserResponse;
use crate::handlers::ApiError;
use crate::state::AppState;

/// Pull the bearer token out of the Authorization header
fn bearer_token(req: &HttpRequest) -> Result<&str, ApiError> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::from(DomainError::from(AuthError::InvalidToken)))
}

/// GET /users/me
///
/// Resolves the caller from the bearer token and returns the profile.
/// A missing or malformed Authorization header is rejected the same way
/// as an invalid token.
pub async fn me<U, O, N>(
    req: HttpRequest,
    state: web::Data<AppState<U, O, N>>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository,
    O: OtpRepository,
    N: EmailNotifier,
{
    let token = bearer_token(&req)?;
    let user = state.auth_service.authenticated_user(token).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
