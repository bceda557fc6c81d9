pub mod middleware;
pub mod rest;
pub mod state;

use crate::docs;
use axum::{http::Method, middleware as axum_middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa_swagger_ui::SwaggerUi;

pub use middleware::log_requests;
pub use rest::{health_handler, index_handler};
pub use state::AppState;

/// Builds the full application router: service routes, the Swagger UI and
/// the raw OpenAPI document.
pub fn router(app_state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(app_state.config.cors_origin.clone())
        .allow_methods([Method::GET, Method::OPTIONS]);

    let api_router = Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .with_state(app_state);

    Router::new()
        .merge(api_router)
        .merge(
            SwaggerUi::new(rest::DOCS_UI_PATH)
                .url(rest::DOCS_JSON_PATH, docs::openapi().clone()),
        )
        .layer(cors)
        .layer(axum_middleware::from_fn(log_requests))
}
