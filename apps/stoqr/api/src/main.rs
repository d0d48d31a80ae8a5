use axum_helpers::{cors_layer_from_env, server::create_production_app};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::{RetryConfig, connect_storage, run_migrations};
use migration::Migrator;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::{Config, Environment};
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Before anything fallible, so startup errors get the colored report
    install_color_eyre();

    // Tracing goes up before the rest of the config so the storage fallback warning is seen
    init_tracing(&Environment::from_env());

    let config = Config::from_env()?;
    info!(
        backend = config.storage.backend_name(),
        environment = ?config.environment,
        "Configuration loaded"
    );

    let db = connect_storage(&config.storage, Some(RetryConfig::default()))
        .await
        .map_err(|e| eyre::eyre!("{} connection failed: {}", config.storage.backend_name(), e))?;

    run_migrations::<Migrator>(&db, config.app.name)
        .await
        .map_err(|e| eyre::eyre!("Migrations failed: {}", e))?;

    let state = AppState { config, db };

    let app = api::app(&state, cors_layer_from_env()?);

    info!(
        backend = state.config.storage.backend_name(),
        timeout = ?state.config.server.shutdown_timeout,
        "Starting STOQR API"
    );

    create_production_app(app, &state.config.server, async move {
        info!("Shutting down: closing database connections");
        match state.db.close().await {
            Ok(()) => info!("Database connection closed successfully"),
            Err(e) => tracing::error!("Error closing database: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("STOQR API shutdown complete");
    Ok(())
}
