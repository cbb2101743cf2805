//! dashboard-server: HTTP API for the analytics dashboard
//!
//! Stores and serves campaign conversions, revenue data points, and overview
//! metric snapshots kept in MongoDB.

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, MemoryStore, MetricsStore, MongoConfig, MongoStore};
pub use http::{build_app, run_server, AppState, ServerConfig, ServerError};
