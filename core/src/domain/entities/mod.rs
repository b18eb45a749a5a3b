//! Domain entities.

pub mod one_time_code;
pub mod token;
pub mod user;

pub use one_time_code::OneTimeCode;
pub use token::{Claims, TokenType};
pub use user::User;
