//! Contact Book - Main entry point
//!
//! Loads configuration, opens the contact store and serves the web UI.

use anyhow::Result;
use contact_book::repositories::{ContactRepository, SqliteContactRepository};
use contact_book::server::{run_server, spawn_flash_sweeper};
use contact_book::services::{ContactService, ContactServiceImpl, ContactValidator};
use contact_book::{build_app, AppState, Config, FlashStore};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (RUST_LOG wins over LOG_LEVEL)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(
        region = %config.phone_region,
        flash_ttl_secs = config.flash_ttl_seconds,
        "Configuration loaded successfully"
    );

    // Initialize the contact store
    let repository = match SqliteContactRepository::connect(
        &config.database_url,
        config.db_max_connections,
    )
    .await
    {
        Ok(repo) => Arc::new(repo) as Arc<dyn ContactRepository>,
        Err(e) => {
            error!("Failed to open contact store: {}", e);
            return Err(e.into());
        }
    };

    // Initialize services
    let validator = ContactValidator::new(repository.clone(), config.phone_region);
    let contacts =
        Arc::new(ContactServiceImpl::new(repository, validator)) as Arc<dyn ContactService>;

    let flash = FlashStore::new(config.flash_ttl());
    let sweeper = spawn_flash_sweeper(flash.clone());

    let app = build_app(AppState::new(contacts, flash));

    // Run the server (this will block until the server exits)
    run_server(app, config.bind_addr()).await?;

    sweeper.abort();
    info!("Contact book shutdown complete");
    Ok(())
}
