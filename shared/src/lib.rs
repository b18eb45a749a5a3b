//! # Account Service Shared
//!
//! Configuration types shared across the account service crates.
//! All configuration is loaded once from the environment at startup and
//! passed to constructors as immutable values.

pub mod config;

pub use config::AppConfig;
