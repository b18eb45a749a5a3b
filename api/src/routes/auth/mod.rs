//! Authentication routes.

mod login;
mod refresh;
mod register;
mod verify;

pub use login::login;
pub use refresh::refresh;
pub use register::register;
pub use verify::verify;

use actix_web::web;

use account_core::repositories::{OtpRepository, UserRepository};
use account_core::services::notification::EmailNotifier;

/// Register the authentication routes under `/auth`
pub fn configure<U, O, N>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    N: EmailNotifier + 'static,
{
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(register::<U, O, N>))
            .route("/verify", web::post().to(verify::<U, O, N>))
            .route("/login", web::post().to(login::<U, O, N>))
            .route("/refresh", web::post().to(refresh::<U, O, N>)),
    );
}
