//! Repository interfaces for data persistence.
//!
//! These traits define the contract between the domain layer and the
//! storage layer. Implementations live in the infrastructure crate;
//! in-memory mocks are provided here for testing.

pub mod otp;
pub mod user;

pub use otp::{MockOtpRepository, OtpRepository};
pub use user::{MockUserRepository, UserRepository, UserUpdate};
