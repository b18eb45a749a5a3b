//! Account service binary.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use account_api::app;
use account_api::state::AppState;
use account_core::services::auth::{AuthService, AuthServiceConfig};
use account_core::services::token::{TokenConfig, TokenService};
use account_infra::{create_pool, LogEmailNotifier, MySqlOtpRepository, MySqlUserRepository};
use account_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    if config.jwt.is_using_default_secret() {
        warn!("SECRET_KEY is unset; tokens are signed with the default development secret");
    }

    let pool = create_pool(&config.database)
        .await
        .context("failed to connect to the database")?;

    let user_repository = Arc::new(MySqlUserRepository::new(pool.clone()));
    let otp_repository = Arc::new(MySqlOtpRepository::new(pool));
    let notifier = Arc::new(LogEmailNotifier::new());

    let token_service = Arc::new(TokenService::new(TokenConfig {
        secret: config.jwt.secret.clone(),
        access_token_expire_minutes: config.jwt.access_token_expire_minutes,
        refresh_token_expire_days: config.jwt.refresh_token_expire_days,
    }));

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        otp_repository,
        notifier,
        token_service,
        AuthServiceConfig {
            otp_code_length: config.otp.code_length,
            otp_expire_minutes: config.otp.expire_minutes,
        },
    ));

    let state = web::Data::new(AppState {
        auth_service,
    });

    let bind_address = config.server.bind_address();
    info!(%bind_address, "starting account service");

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(state.clone())
            .configure(app::configure::<MySqlUserRepository, MySqlOtpRepository, LogEmailNotifier>)
    })
    .bind(&bind_address)
    .with_context(|| format!("failed to bind {}", bind_address))?
    .run()
    .await?;

    Ok(())
}
