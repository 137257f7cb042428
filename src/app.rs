//! Application factory: turns a resolved [`Config`] and an open database
//! pool into a fully configured router, ready to accept requests.

use axum::{extract::DefaultBodyLimit, middleware, routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::constants::{MAX_CONTENT_LENGTH, UPLOADS_URL_PREFIX};
use crate::cors::cors_layer;
use crate::db::DbPool;
use crate::middleware::content_length_guard;
use crate::routes;
use crate::uploads;

/// Shared state handed to every route handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: DbPool,
}

pub fn create_app(config: Arc<Config>, db: DbPool) -> Router {
    let cors = cors_layer(&config.allowed_origins);

    Router::new()
        // API routes (domain routers merge in here)
        .merge(routes::router())
        // Uploaded photos, served outside API routing
        .route(
            &format!("{}/*path", UPLOADS_URL_PREFIX),
            get(uploads::serve_upload),
        )
        // API docs
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", routes::ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(middleware::from_fn(content_length_guard))
                .layer(DefaultBodyLimit::max(MAX_CONTENT_LENGTH)),
        )
        .with_state(AppState { config, db })
}
