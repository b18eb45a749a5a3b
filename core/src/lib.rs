//! # Account Service Core
//!
//! Core business logic and domain layer for the account service.
//! This crate contains domain entities, business services, repository
//! interfaces, and error types that form the foundation of the
//! application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, OneTimeCode, TokenType, User};
pub use domain::value_objects::TokenPair;
pub use errors::{AuthError, DomainError, DomainResult};
pub use repositories::{OtpRepository, UserRepository, UserUpdate};
pub use services::{AuthService, EmailNotifier, TokenService};
