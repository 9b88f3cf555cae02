use axum::{http::StatusCode, middleware, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::Config,
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    services::{PosterProvider, RecommenderContext},
};

pub mod movies;
pub mod recommendations;

/// Request defaults taken from configuration
#[derive(Debug, Clone, Copy)]
pub struct ApiSettings {
    pub recommendation_count: usize,
    pub top_movies_count: usize,
}

impl From<&Config> for ApiSettings {
    fn from(config: &Config) -> Self {
        Self {
            recommendation_count: config.recommendation_count,
            top_movies_count: config.top_movies_count,
        }
    }
}

/// Shared state handed to every handler
pub struct AppState {
    pub recommender: RecommenderContext,
    pub posters: Arc<dyn PosterProvider>,
    pub settings: ApiSettings,
}

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // The request id must be set before the trace span is created
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .with_state(Arc::new(state))
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
}

/// API routes under /api/v1
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/movies", get(movies::list))
        .route("/movies/top", get(movies::top))
        .route("/recommendations", get(recommendations::recommend))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
