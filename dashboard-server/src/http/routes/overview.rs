//! Overview metric endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use super::{created, CreatedResponse};
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{NewOverviewMetrics, OverviewMetrics};

/// GET /overview - snapshots, newest first
async fn list_overview(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<OverviewMetrics>>, ApiError> {
    Ok(Json(state.overview().list().await?))
}

/// GET /overview/latest - newest snapshot, 404 when there are none
async fn latest_overview(
    State(state): State<Arc<AppState>>,
) -> Result<Json<OverviewMetrics>, ApiError> {
    Ok(Json(state.overview().latest().await?))
}

/// POST /overview
async fn create_overview(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<NewOverviewMetrics>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let record = state.overview().create(body).await?;
    Ok(created("Overview metrics created successfully", record.id))
}

/// Overview routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/overview", get(list_overview).post(create_overview))
        .route("/overview/latest", get(latest_overview))
}
