//! Application route wiring.

use actix_web::web;

use account_core::repositories::{OtpRepository, UserRepository};
use account_core::services::notification::EmailNotifier;

use crate::routes;

/// Register every route of the service
///
/// Generic over the repository and notifier implementations so tests
/// can mount the same surface on in-memory mocks.
pub fn configure<U, O, N>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    N: EmailNotifier + 'static,
{
    routes::health::configure(cfg);
    routes::auth::configure::<U, O, N>(cfg);
    routes::users::configure::<U, O, N>(cfg);
}
