//! Mapping from domain errors to HTTP responses.
//!
//! Business-rule failures map to 4xx with a stable error code; store
//! and internal failures map to a generic 500 whose details go to the
//! log only.

use actix_web::http::header;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use tracing::error;
use validator::ValidationErrors;

use account_core::errors::{AuthError, DomainError};

/// Error body returned to clients
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable error code for programmatic handling
    pub error: String,
    /// Human-readable message
    pub message: String,
}

/// API-level error wrapping domain and validation failures
#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    Validation(String),
}

impl ApiError {
    /// Wrap request-body validation failures
    pub fn validation(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors.to_string().replace('\n', "; "))
    }

    fn error_code(&self) -> &'static str {
        match self {
            ApiError::Domain(DomainError::Auth(e)) => match e {
                AuthError::UserAlreadyExists => "USER_ALREADY_EXISTS",
                AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
                AuthError::InvalidOtp => "INVALID_OTP",
                AuthError::OtpExpired => "OTP_EXPIRED",
                AuthError::InvalidToken => "INVALID_TOKEN",
                AuthError::UserNotFound => "USER_NOT_FOUND",
            },
            ApiError::Domain(_) => "INTERNAL_ERROR",
            ApiError::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Domain(e) => write!(f, "{}", e),
            ApiError::Validation(message) => write!(f, "{}", message),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Domain(err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(DomainError::Auth(e)) => match e {
                AuthError::UserAlreadyExists => StatusCode::BAD_REQUEST,
                AuthError::InvalidOtp => StatusCode::BAD_REQUEST,
                AuthError::OtpExpired => StatusCode::BAD_REQUEST,
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
                AuthError::UserNotFound => StatusCode::NOT_FOUND,
            },
            ApiError::Domain(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        // Connectivity and internal failures are logged in full but
        // reported generically
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self, "request failed with internal error");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        let mut builder = HttpResponse::build(status);
        if status == StatusCode::UNAUTHORIZED {
            builder.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
        }
        builder.json(ErrorBody {
            error: self.error_code().to_string(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AuthError) -> StatusCode {
        ApiError::from(DomainError::from(err)).status_code()
    }

    #[test]
    fn test_auth_error_status_codes() {
        assert_eq!(status_of(AuthError::UserAlreadyExists), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(AuthError::InvalidOtp), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(AuthError::OtpExpired), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(AuthError::InvalidCredentials), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(AuthError::InvalidToken), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(AuthError::UserNotFound), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_error_is_500_with_generic_body() {
        let err = ApiError::from(DomainError::Database {
            message: "connection refused to db-host:3306".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_unauthorized_carries_www_authenticate() {
        let err = ApiError::from(DomainError::from(AuthError::InvalidToken));
        let response = err.error_response();
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }
}
