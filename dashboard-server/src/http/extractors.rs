//! Custom Axum extractors

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::ValidationError;

/// JSON request body whose rejections become 400 validation errors.
///
/// Plain `Json` answers shape mismatches with 422 and a missing content type
/// with 415; every create endpoint here reports both as 400.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation(ValidationError::from(rejection)))?;
        Ok(Self(value))
    }
}

impl From<JsonRejection> for ValidationError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => Self::Shape {
                reason: e.body_text(),
            },
            JsonRejection::JsonSyntaxError(e) => Self::Syntax {
                reason: e.body_text(),
            },
            JsonRejection::MissingJsonContentType(_) => Self::MissingContentType,
            other => Self::Unreadable {
                reason: other.body_text(),
            },
        }
    }
}
