//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use emoji_common::{AppConfig, AppError};
use emoji_service::{GalleryStore, HttpImageClient, ServiceContextBuilder};
use emoji_storage::FileStorage;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = apply_middleware(
        create_router(),
        &config.cors,
        config.app.env.is_production(),
        config.generator.timeout(),
    );
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
///
/// Opens file storage, hydrates the gallery, and wires the HTTP client for
/// both generation and downloads.
pub fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!(dir = %config.storage.dir.display(), "Opening gallery storage...");
    let storage = FileStorage::new(&config.storage.dir)?;

    let mut store = GalleryStore::new(Arc::new(storage), config.storage.key.clone());
    let outcome = store.hydrate()?;
    info!(outcome = ?outcome, items = store.items().len(), "Gallery ready");

    let client = Arc::new(HttpImageClient::from_config(&config.generator)?);

    let service_context = ServiceContextBuilder::new()
        .gallery(store.into_shared())
        .generator(client.clone())
        .fetcher(client)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Internal(e.into()))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid API address {}: {e}", config.api.address())))?;

    let state = create_app_state(config)?;
    let app = create_app(state);

    run_server(app, addr).await
}
