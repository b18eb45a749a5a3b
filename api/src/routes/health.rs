//! Root banner and health probe.

use actix_web::{web, HttpResponse};
use serde_json::json;

/// GET / - service banner
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "Account service is running"
    }))
}

/// GET /health - liveness probe
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy"
    }))
}

/// Register the root and health routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(health));
}
