//! Application configuration
//!
//! Each sub-module holds the configuration for one concern. `AppConfig`
//! aggregates them and is built once in `main` from environment variables;
//! nothing else in the system reads the environment.

pub mod auth;
pub mod database;
pub mod otp;
pub mod server;

pub use auth::JwtConfig;
pub use database::DatabaseConfig;
pub use otp::OtpConfig;
pub use server::ServerConfig;

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// JWT configuration
    pub jwt: JwtConfig,

    /// One-time password configuration
    pub otp: OtpConfig,
}

impl AppConfig {
    /// Load the complete configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env(),
            otp: OtpConfig::from_env(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            jwt: JwtConfig::default(),
            otp: OtpConfig::default(),
        }
    }
}
