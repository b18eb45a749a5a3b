//! Business services composing the authentication flows.

pub mod auth;
pub mod hasher;
pub mod notification;
pub mod otp;
pub mod token;

pub use auth::AuthService;
pub use notification::EmailNotifier;
pub use token::TokenService;
