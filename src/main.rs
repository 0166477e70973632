// Folio Server
//
// Main server binary: portfolio settings, avatar upload, and lead capture.

mod lifecycle;
mod logging;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::Result;
use folio_api::routes;
use folio_commons::ServerConfig;
use log::info;

#[actix_web::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = ServerConfig::from_file("config.toml")
        .map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;

    // Initialize logging
    logging::init_logging(&config.logging.level, &config.logging.format)?;

    info!("Starting Folio Server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded: host={}, port={}",
        config.server.host, config.server.port
    );

    let state = lifecycle::bootstrap(&config).await?;

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting HTTP server on {}", bind_addr);
    info!("Endpoints: POST /api/upload/pfp, POST /api/upload/settings, POST /api/lead, GET /api/profile/{{path}}");

    let users = state.users;
    let leads = state.leads;
    let avatars = state.avatars;
    let mailer = state.mailer;
    let auth = config.auth.clone();
    let allowed_origins = config.server.allowed_origins.clone();

    // Start HTTP server
    HttpServer::new(move || {
        // Configure CORS for web browser clients
        let mut cors = if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
            // Credentials cannot be combined with a wildcard origin.
            Cors::default().allow_any_origin()
        } else {
            let mut cors = Cors::default().supports_credentials();
            for origin in &allowed_origins {
                cors = cors.allowed_origin(origin);
            }
            cors
        };
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors)
            .app_data(web::Data::new(users.clone()))
            .app_data(web::Data::new(leads.clone()))
            .app_data(web::Data::new(avatars.clone()))
            .app_data(web::Data::new(mailer.clone()))
            .app_data(web::Data::new(auth.clone()))
            .configure(routes::configure_routes)
    })
    .bind(&bind_addr)?
    .workers(config.server.workers)
    .run()
    .await?;

    info!("Server shutdown complete");
    Ok(())
}
