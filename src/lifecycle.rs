//! Startup wiring: connect the backing services and assemble the shared
//! application state handed to every worker.

use std::sync::Arc;

use anyhow::{Context, Result};
use aws_config::{BehaviorVersion, Region};
use folio_commons::ServerConfig;
use folio_mail::{Mailer, SmtpMailer};
use folio_store::{
    ensure_indexes, init_mongo, AvatarStorage, LeadRepository, MongoLeadRepository,
    MongoUserRepository, S3AvatarStorage, UserRepository,
};
use log::info;

/// Shared collaborators behind `Arc<dyn Trait>` seams.
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub leads: Arc<dyn LeadRepository>,
    pub avatars: Arc<dyn AvatarStorage>,
    pub mailer: Arc<dyn Mailer>,
}

/// Connect to MongoDB and S3, ensure indexes, and build the SMTP mailer.
///
/// Fails fast: a service that cannot reach its store at startup is not
/// worth keeping alive.
pub async fn bootstrap(config: &ServerConfig) -> Result<AppState> {
    let database = init_mongo(&config.database.url, &config.database.database)
        .await
        .context("MongoDB connection failed")?;
    ensure_indexes(&database)
        .await
        .context("MongoDB index creation failed")?;

    let users: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(&database));
    let leads: Arc<dyn LeadRepository> = Arc::new(MongoLeadRepository::new(&database));

    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.storage.region.clone()))
        .load()
        .await;
    let s3_client = aws_sdk_s3::Client::new(&aws_config);
    let avatars: Arc<dyn AvatarStorage> = Arc::new(S3AvatarStorage::new(
        s3_client,
        config.storage.bucket.clone(),
        config.storage.region.clone(),
    ));
    info!(
        "Avatar storage ready: bucket={}, region={}",
        config.storage.bucket, config.storage.region
    );

    let mailer: Arc<dyn Mailer> = Arc::new(
        SmtpMailer::from_settings(&config.mail)
            .map_err(|e| anyhow::anyhow!("SMTP mailer setup failed: {}", e))?,
    );
    info!("SMTP mailer ready: host={}", config.mail.smtp_host);

    Ok(AppState {
        users,
        leads,
        avatars,
        mailer,
    })
}
