//! MySQL implementation of the UserRepository trait.
//!
//! Email uniqueness is enforced by the `users.email` unique index; a
//! duplicate insert surfaces as `UserAlreadyExists` while every other
//! database failure stays a distinct `Database` error.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySql, MySqlPool, QueryBuilder, Row};
use tracing::debug;

use account_core::domain::entities::user::User;
use account_core::errors::{AuthError, DomainError};
use account_core::repositories::{UserRepository, UserUpdate};

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        Ok(User {
            id: Some(row.try_get::<i64, _>("id").map_err(|e| DomainError::Database {
                message: format!("Failed to get id: {}", e),
            })?),
            email: row.try_get("email").map_err(|e| DomainError::Database {
                message: format!("Failed to get email: {}", e),
            })?,
            firstname: row.try_get("firstname").map_err(|e| DomainError::Database {
                message: format!("Failed to get firstname: {}", e),
            })?,
            lastname: row.try_get("lastname").map_err(|e| DomainError::Database {
                message: format!("Failed to get lastname: {}", e),
            })?,
            password_hash: row.try_get("password_hash").map_err(|e| DomainError::Database {
                message: format!("Failed to get password_hash: {}", e),
            })?,
            is_active: row.try_get("is_active").map_err(|e| DomainError::Database {
                message: format!("Failed to get is_active: {}", e),
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
impl UserRepository for MySqlUserRepository {
    async fn create(&self, user: User) -> Result<i64, DomainError> {
        let query = r#"
            INSERT INTO users (email, firstname, lastname, password_hash, is_active, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&user.email)
            .bind(&user.firstname)
            .bind(&user.lastname)
            .bind(&user.password_hash)
            .bind(user.is_active)
            .bind(user.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                    DomainError::Auth(AuthError::UserAlreadyExists)
                }
                _ => DomainError::Database {
                    message: format!("Failed to create user: {}", e),
                },
            })?;

        let id = result.last_insert_id() as i64;
        debug!(user_id = id, "created user");
        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, firstname, lastname, password_hash, is_active, created_at
            FROM users
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, firstname, lastname, password_hash, is_active, created_at
            FROM users
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn update(&self, id: i64, update: UserUpdate) -> Result<Option<User>, DomainError> {
        let Some(current) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        // Nothing to update: return the account unchanged, no write
        if update.is_empty() {
            return Ok(Some(current));
        }

        // Allow-listed fields only; every value is a bound parameter
        let mut builder: QueryBuilder<MySql> = QueryBuilder::new("UPDATE users SET ");
        let mut fields = builder.separated(", ");
        if let Some(email) = &update.email {
            fields.push("email = ").push_bind_unseparated(email);
        }
        if let Some(firstname) = &update.firstname {
            fields.push("firstname = ").push_bind_unseparated(firstname);
        }
        if let Some(lastname) = &update.lastname {
            fields.push("lastname = ").push_bind_unseparated(lastname);
        }
        if let Some(password_hash) = &update.password_hash {
            fields.push("password_hash = ").push_bind_unseparated(password_hash);
        }
        if let Some(is_active) = update.is_active {
            fields.push("is_active = ").push_bind_unseparated(is_active);
        }
        builder.push(" WHERE id = ").push_bind(id);

        builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update user: {}", e),
            })?;

        debug!(user_id = id, "updated user");
        self.find_by_id(id).await
    }
}
