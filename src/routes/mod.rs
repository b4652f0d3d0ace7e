use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::services::ChzzkSearch;

pub mod search;

/// State shared by all handlers
pub struct AppState {
    pub search: ChzzkSearch,
}

impl AppState {
    pub fn new(search: ChzzkSearch) -> Self {
        Self { search }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/search/videos", get(search::videos))
        .route("/search/lives", get(search::lives))
        .route("/search/channels", get(search::channels))
        .route("/search/auto-complete", get(search::auto_complete))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
