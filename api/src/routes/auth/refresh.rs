//! Token refresh endpoint.

use actix_web::{web, HttpResponse};

use account_core::repositories::{OtpRepository, UserRepository};
use account_core::services::notification::EmailNotifier;

use crate::dto::auth::{RefreshTokenRequest, TokenResponse};
use crate::handlers::ApiError;
use crate::state::AppState;

/// POST /auth/refresh
///
/// Exchanges a valid refresh token for a new pair. The submitted token
/// is not revoked and stays usable until it expires.
pub async fn refresh<U, O, N>(
    state: web::Data<AppState<U, O, N>>,
    body: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository,
    O: OtpRepository,
    N: EmailNotifier,
{
    let pair = state.auth_service.refresh_token(&body.refresh_token).await?;

    Ok(HttpResponse::Ok().json(TokenResponse::from(pair)))
}
