//! Axum server setup
//!
//! Server skeleton with:
//! - CORS limited to the dashboard frontends by default
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::db::{
    CampaignRepo, MetricsStore, OverviewRepo, RevenueRepo, DEFAULT_OPERATION_TIMEOUT,
};

/// Origins of the dashboard frontends in development
pub const DEFAULT_CORS_ORIGINS: &[&str] = &["http://localhost:3000", "http://localhost:5173"];

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:8080)
    pub bind_addr: SocketAddr,

    /// Origins allowed to make credentialed cross-origin requests
    pub cors_origins: Vec<String>,

    /// Allow any origin (credentials disabled)
    pub cors_permissive: bool,

    /// Deadline for each data-access operation
    pub op_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
            cors_permissive: false,
            op_timeout: DEFAULT_OPERATION_TIMEOUT,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MetricsStore>,
    pub op_timeout: Duration,
}

impl AppState {
    pub fn new(store: Arc<dyn MetricsStore>, op_timeout: Duration) -> Self {
        Self { store, op_timeout }
    }

    pub fn campaigns(&self) -> CampaignRepo<'_> {
        CampaignRepo::new(self.store.as_ref(), self.op_timeout)
    }

    pub fn revenue(&self) -> RevenueRepo<'_> {
        RevenueRepo::new(self.store.as_ref(), self.op_timeout)
    }

    pub fn overview(&self) -> OverviewRepo<'_> {
        OverviewRepo::new(self.store.as_ref(), self.op_timeout)
    }
}

fn cors_layer(config: &ServerConfig) -> Result<CorsLayer, ServerError> {
    if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        return Ok(CorsLayer::permissive());
    }

    let origins = config
        .cors_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ServerError::InvalidOrigin(origin.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
        .expose_headers([header::CONTENT_LENGTH])
        .allow_credentials(true))
}

/// Build the full application: routes, CORS, and request tracing.
pub fn build_app(state: AppState, config: &ServerConfig) -> Result<Router, ServerError> {
    let cors = cors_layer(config)?;

    Ok(Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state)))
}

/// Run the HTTP server until Ctrl+C or SIGTERM.
pub async fn run_server(store: Arc<dyn MetricsStore>, config: ServerConfig) -> Result<(), ServerError> {
    let state = AppState::new(store, config.op_timeout);
    let app = build_app(state, &config)?;

    // Bind listener
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on http://{}", config.bind_addr);

    // Run with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid CORS origin: '{0}'")]
    InvalidOrigin(String),
}
