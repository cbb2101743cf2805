//! Route handlers organized by resource

pub mod campaigns;
pub mod health;
pub mod overview;
pub mod revenue;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::{Json, Router};
use serde::Serialize;
use uuid::Uuid;

use super::server::AppState;

/// Body returned by every create endpoint
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: Uuid,
}

pub(crate) fn created(message: &'static str, id: Uuid) -> (StatusCode, Json<CreatedResponse>) {
    (StatusCode::CREATED, Json(CreatedResponse { message, id }))
}

/// Everything mounted under `/api/v1`
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(health::api_router())
        .merge(campaigns::router())
        .merge(revenue::router())
        .merge(overview::router())
}
