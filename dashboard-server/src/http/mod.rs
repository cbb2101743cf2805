//! HTTP server layer
//!
//! Axum server with:
//! - CORS (dashboard dev origins by default)
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_app, run_server, AppState, ServerConfig, ServerError};
