/**
 * Server Initialization
 *
 * Builds the application from a loaded `ServerConfig`.
 *
 * # Initialization Process
 *
 * 1. Open the store: SQLite when `DATABASE_URL` is set, memory otherwise
 * 2. Create the token service and live game registry (`AppState`)
 * 3. Seed sample data when `SEED_SAMPLE_DATA` is on
 * 4. Create the router with all routes and layers
 *
 * Unlike a missing optional service, a configured database that cannot be
 * opened or migrated is fatal.
 */

use axum::Router;
use std::sync::Arc;
use thiserror::Error;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::store::seed::{seed_sample_data, SeedError};
use crate::backend::store::{GameStore, MemoryStore, SqlStore, StoreError};

#[derive(Debug, Error)]
pub enum InitError {
    #[error("Failed to open store: {0}")]
    Store(#[from] StoreError),

    #[error("Failed to seed sample data: {0}")]
    Seed(#[from] SeedError),
}

/// Open the store selected by `config.database_url`
pub async fn build_store(config: &ServerConfig) -> Result<Arc<dyn GameStore>, StoreError> {
    match &config.database_url {
        Some(url) => {
            tracing::info!("Connecting to database...");
            let store = SqlStore::connect(url).await.map_err(|e| {
                tracing::error!("Failed to open database: {}", e);
                e
            })?;
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using the in-memory store (data is lost on restart)");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

/// Build the shared state, seeding it when configured
pub async fn build_state(config: ServerConfig) -> Result<AppState, InitError> {
    if config.uses_dev_secret() {
        tracing::warn!("JWT_SECRET not set, using the development secret");
    }

    let store = build_store(&config).await?;
    let app_state = AppState::new(store, config);

    if app_state.config.seed_sample_data {
        seed_sample_data(
            app_state.store.as_ref(),
            &app_state.live_games,
            app_state.config.bcrypt_cost,
        )
        .await?;
    }

    tracing::info!(
        store = app_state.store.backend_name(),
        api_prefix = %app_state.config.api_prefix,
        "Application state initialized"
    );

    Ok(app_state)
}

/// Create and configure the Axum application
pub async fn create_app(config: ServerConfig) -> Result<Router, InitError> {
    tracing::info!("Initializing Snake Arena backend server");

    let app_state = build_state(config).await?;
    Ok(create_router(app_state))
}
