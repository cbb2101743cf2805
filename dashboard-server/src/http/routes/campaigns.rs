//! Campaign endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use super::{created, CreatedResponse};
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{CampaignConversion, NewCampaign};

/// GET /campaigns - all campaigns in storage order
async fn list_campaigns(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CampaignConversion>>, ApiError> {
    let campaigns = state.campaigns().list().await?;
    Ok(Json(campaigns))
}

/// POST /campaigns - record a campaign conversion count
async fn create_campaign(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<NewCampaign>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let record = state.campaigns().create(body).await?;
    Ok(created("Campaign created successfully", record.id))
}

/// Campaign routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/campaigns", get(list_campaigns).post(create_campaign))
}
