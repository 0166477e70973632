//! API routes configuration.

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::handlers;

/// Configure API routes.
///
/// - POST /api/upload/pfp - Avatar upload (requires session)
/// - POST /api/upload/settings - Settings save (requires session)
/// - POST /api/lead - Lead capture
/// - GET /api/profile/{path} - Public profile lookup
/// - GET /api/healthcheck - Health check endpoint
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/upload/pfp", web::post().to(handlers::upload_pfp_handler))
            .route(
                "/upload/settings",
                web::post().to(handlers::upload_settings_handler),
            )
            .route("/lead", web::post().to(handlers::lead_handler))
            .route("/profile/{path}", web::get().to(handlers::profile_handler))
            .route("/healthcheck", web::get().to(healthcheck_handler)),
    );
}

/// Health check endpoint handler
async fn healthcheck_handler() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
