//! Account registration endpoint.

use actix_web::{web, HttpResponse};
use validator::Validate;

use account_core::repositories::{OtpRepository, UserRepository};
use account_core::services::notification::EmailNotifier;

use crate::dto::auth::{OtpResponse, RegisterRequest};
use crate::handlers::ApiError;
use crate::state::AppState;

/// POST /auth/register
///
/// Creates an inactive account and responds 201 with the activation
/// code. The code also goes out through the notifier; returning it in
/// the body is deliberate.
pub async fn register<U, O, N>(
    state: web::Data<AppState<U, O, N>>,
    body: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository,
    O: OtpRepository,
    N: EmailNotifier,
{
    body.validate().map_err(ApiError::validation)?;

    let code = state
        .auth_service
        .register(&body.email, &body.firstname, &body.lastname, &body.password)
        .await?;

    Ok(HttpResponse::Created().json(OtpResponse {
        activation_code: code,
    }))
}
