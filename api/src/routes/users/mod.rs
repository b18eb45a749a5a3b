//! Current-user routes.

mod me;

pub use me::me;

use actix_web::web;

use account_core::repositories::{OtpRepository, UserRepository};
use account_core::services::notification::EmailNotifier;

/// Register the user routes under `/users`
pub fn configure<U, O, N>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    N: EmailNotifier + 'static,
{
    cfg.service(web::scope("/users").route("/me", web::get().to(me::<U, O, N>)));
}
