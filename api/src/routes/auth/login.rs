//! Login endpoint.

use actix_web::{web, HttpResponse};
use validator::Validate;

use account_core::repositories::{OtpRepository, UserRepository};
use account_core::services::notification::EmailNotifier;

use crate::dto::auth::{LoginRequest, TokenResponse};
use crate::handlers::ApiError;
use crate::state::AppState;

/// POST /auth/login
///
/// Unknown email and wrong password both surface as the same 401; the
/// response never says which check failed.
pub async fn login<U, O, N>(
    state: web::Data<AppState<U, O, N>>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository,
    O: OtpRepository,
    N: EmailNotifier,
{
    body.validate().map_err(ApiError::validation)?;

    let pair = state.auth_service.login(&body.email, &body.password).await?;

    Ok(HttpResponse::Ok().json(TokenResponse::from(pair)))
}
