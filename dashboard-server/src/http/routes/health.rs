//! Liveness endpoints

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Root banner response
#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "API is running",
    })
}

/// GET /api/v1/health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

/// Routes mounted at the server root
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(root))
}

/// Routes mounted under `/api/v1`
pub fn api_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}
