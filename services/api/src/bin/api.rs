//! services/api/src/bin/api.rs

use dattebayo_api::{
    config::Config,
    docs,
    error::ApiError,
    web::{self, rest::DOCS_UI_PATH, AppState},
};
use dattebayo_core::COLLECTION_NAMES;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Build the OpenAPI Document ---
    let spec = docs::openapi();
    info!(
        "OpenAPI document ready with {} paths",
        spec.paths.paths.len()
    );

    // --- 3. Build the Shared AppState & Router ---
    let app_state = Arc::new(AppState {
        config: config.clone(),
        collections: COLLECTION_NAMES,
    });
    let app = web::router(app_state);

    // --- 4. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}{}",
        config.bind_address, DOCS_UI_PATH
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
