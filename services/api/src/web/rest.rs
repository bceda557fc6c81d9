//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers the service answers itself and the OpenAPI
//! definition collecting their annotations.

use crate::web::state::AppState;
use axum::{extract::State, response::Json};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

/// Where the Swagger UI is mounted.
pub const DOCS_UI_PATH: &str = "/swagger-ui";
/// Where the raw OpenAPI document is served.
pub const DOCS_JSON_PATH: &str = "/api-docs/openapi.json";

//=========================================================================================
// OpenAPI Definition for Annotated Handlers
//=========================================================================================

/// Operations documented on the handlers in this module. Merged into the
/// generated collection document by [`crate::docs::build_openapi`].
#[derive(OpenApi)]
#[openapi(
    paths(index_handler, health_handler),
    components(schemas(IndexResponse, HealthResponse)),
    tags(
        (name = "Meta", description = "Service index and health")
    )
)]
pub struct RoutesDoc;

//=========================================================================================
// API Response Structs
//=========================================================================================

/// Landing payload pointing clients at the collections and the docs.
#[derive(Debug, Serialize, ToSchema)]
pub struct IndexResponse {
    pub message: String,
    pub collections: Vec<String>,
    pub docs: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// List the available collections.
#[utoipa::path(
    get,
    path = "/",
    tag = "Meta",
    responses(
        (status = 200, description = "Service index", body = IndexResponse)
    )
)]
pub async fn index_handler(State(app_state): State<Arc<AppState>>) -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Welcome to the Dattebayo API".to_string(),
        collections: app_state
            .collections
            .iter()
            .map(|c| c.to_string())
            .collect(),
        docs: DOCS_UI_PATH.to_string(),
    })
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Meta",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
