//! Route registration seam.
//!
//! Domain routers (trips, locations, photos) merge into the router built
//! here; this crate itself only carries the health endpoint.

use axum::{routing::get, Json, Router};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::app::AppState;
use crate::constants::MAX_CONTENT_LENGTH;

#[derive(OpenApi)]
#[openapi(
    paths(health),
    components(schemas(HealthResponse)),
    tags(
        (name = "journitag", description = "Travel journal backend")
    ),
    info(
        title = "journitag API",
        version = "0.1.0",
        description = "Backend for the journitag travel journal.\n\n\
                      Uploaded photos are served under /uploads; the JSON API \
                      lives under /api.",
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/health", get(health))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Maximum request body size in bytes
    pub max_content_length: usize,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "journitag",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        max_content_length: MAX_CONTENT_LENGTH,
    })
}
