//! Revenue endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use super::{created, CreatedResponse};
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{NewRevenueDataPoint, RevenueDataPoint};

/// GET /revenue
async fn list_revenue(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RevenueDataPoint>>, ApiError> {
    Ok(Json(state.revenue().list().await?))
}

/// POST /revenue
async fn create_revenue(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<NewRevenueDataPoint>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let record = state.revenue().create(body).await?;
    Ok(created("Revenue data created successfully", record.id))
}

/// Revenue routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/revenue", get(list_revenue).post(create_revenue))
}
