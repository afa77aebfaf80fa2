/**
 * Server Initialization
 *
 * Wires configuration, the document store, the services, and the router
 * into a ready-to-serve application.
 *
 * # Initialization Process
 *
 * 1. Connect to the document store
 * 2. Build the token issuer from the configured secret
 * 3. Construct `AppState` (store + services) once, injected everywhere
 * 4. Assemble the router with its cross-cutting layers
 */

use std::sync::Arc;

use axum::Router;

use crate::auth::tokens::TokenIssuer;
use crate::error::ApiError;
use crate::routes::create_router;
use crate::server::config::AppConfig;
use crate::server::state::AppState;
use crate::store::{MongoUserStore, UserStore};

/// Create and configure the Axum application
///
/// Connects to MongoDB using the configured URL; a connection or index
/// failure is fatal, since every endpoint depends on the store.
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, ApiError> {
    tracing::info!("Initializing backend server");

    let store =
        MongoUserStore::connect(&config.mongodb_url, &config.database_name).await?;
    let store: Arc<dyn UserStore> = Arc::new(store);

    Ok(create_app_with_store(store, config))
}

/// Assemble the application around an already-constructed store
///
/// Used by `create_app` and by the test suite, which injects the
/// in-memory store instead of a live database.
pub fn create_app_with_store(store: Arc<dyn UserStore>, config: &AppConfig) -> Router<()> {
    let tokens = TokenIssuer::new(config.jwt_secret.clone());
    let state = AppState::new(store, tokens);

    tracing::info!("Application state initialized");
    create_router(state, config)
}
