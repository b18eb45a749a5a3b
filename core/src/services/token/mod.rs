//! JWT token issuance and verification.

pub mod config;
pub mod service;

pub use config::TokenConfig;
pub use service::TokenService;
