//! Registration verification endpoint.

use actix_web::{web, HttpResponse};
use validator::Validate;

use account_core::repositories::{OtpRepository, UserRepository};
use account_core::services::notification::EmailNotifier;

use crate::dto::auth::{TokenResponse, VerifyRequest};
use crate::handlers::ApiError;
use crate::state::AppState;

/// POST /auth/verify
///
/// Checks the submitted activation code, activates the account and
/// returns a fresh token pair.
pub async fn verify<U, O, N>(
    state: web::Data<AppState<U, O, N>>,
    body: web::Json<VerifyRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository,
    O: OtpRepository,
    N: EmailNotifier,
{
    body.validate().map_err(ApiError::validation)?;

    let pair = state
        .auth_service
        .verify_registration(&body.email, &body.activation_code.to_string())
        .await?;

    Ok(HttpResponse::Ok().json(TokenResponse::from(pair)))
}
