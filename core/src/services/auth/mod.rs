//! Authentication orchestration: register, verify, login, refresh.

pub mod config;
pub mod service;

pub use config::AuthServiceConfig;
pub use service::AuthService;
