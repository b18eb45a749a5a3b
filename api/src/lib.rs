//! # Account Service API
//!
//! HTTP layer for the account service: request DTOs, route handlers,
//! and the mapping from domain errors to HTTP responses. Handlers are
//! generic over the repository and notifier traits so that tests can
//! run the full HTTP surface against in-memory implementations.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod routes;
pub mod state;

pub use state::AppState;
