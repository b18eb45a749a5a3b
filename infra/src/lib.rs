//! # Account Service Infrastructure
//!
//! Concrete implementations of the core repository and notification
//! interfaces: MySQL persistence via sqlx and email delivery.
//!
//! Every store operation goes through parameter binding exclusively;
//! user-controlled data never changes query structure.

pub mod database;
pub mod email;

pub use database::mysql::{MySqlOtpRepository, MySqlUserRepository};
pub use database::create_pool;
pub use email::LogEmailNotifier;
