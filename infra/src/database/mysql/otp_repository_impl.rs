//! MySQL implementation of the OtpRepository trait.
//!
//! The `activations` table holds one row per issued code. Inserts never
//! displace earlier rows; lookup returns the newest row only, and
//! consumption deletes every row for the `(email, purpose)` pair.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use tracing::debug;

use account_core::domain::entities::one_time_code::OneTimeCode;
use account_core::errors::DomainError;
use account_core::repositories::OtpRepository;

/// MySQL implementation of OtpRepository
pub struct MySqlOtpRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlOtpRepository {
    /// Create a new MySQL one-time code repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a OneTimeCode entity
    fn row_to_code(row: &sqlx::mysql::MySqlRow) -> Result<OneTimeCode, DomainError> {
        Ok(OneTimeCode {
            id: Some(row.try_get::<i64, _>("id").map_err(|e| DomainError::Database {
                message: format!("Failed to get id: {}", e),
            })?),
            user_id: row.try_get("user_id").map_err(|e| DomainError::Database {
                message: format!("Failed to get user_id: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Database {
                message: format!("Failed to get email: {}", e),
            })?,
            purpose: row.try_get("purpose").map_err(|e| DomainError::Database {
                message: format!("Failed to get purpose: {}", e),
            })?,
            code: row.try_get("code").map_err(|e| DomainError::Database {
                message: format!("Failed to get code: {}", e),
            })?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get expires_at: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl OtpRepository for MySqlOtpRepository {
    async fn save(&self, code: OneTimeCode) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO activations (user_id, email, purpose, code, expires_at, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(code.user_id)
            .bind(&code.email)
            .bind(&code.purpose)
            .bind(&code.code)
            .bind(code.expires_at)
            .bind(code.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to save one-time code: {}", e),
            })?;

        debug!(email = %code.email, purpose = %code.purpose, "saved one-time code");
        Ok(())
    }

    async fn find_latest_by_email_and_purpose(
        &self,
        email: &str,
        purpose: &str,
    ) -> Result<Option<OneTimeCode>, DomainError> {
        // Expiry is deliberately not filtered here; the caller checks it
        let query = r#"
            SELECT id, user_id, email, purpose, code, expires_at, created_at
            FROM activations
            WHERE email = ? AND purpose = ?
            ORDER BY created_at DESC
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .bind(purpose)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_code(&row)?)),
            None => Ok(None),
        }
    }

    async fn consume(&self, email: &str, purpose: &str) -> Result<(), DomainError> {
        let query = r#"
            DELETE FROM activations
            WHERE email = ? AND purpose = ?
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .bind(purpose)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to consume one-time codes: {}", e),
            })?;

        debug!(
            email,
            purpose,
            deleted = result.rows_affected(),
            "consumed one-time codes"
        );
        Ok(())
    }
}
