//! Main webserver implementation
//!
//! Wires the data sources into shared state and serves the REST API plus the
//! static dashboard files.

use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use shared::logging;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;

use crate::config::WebServerConfig;
use crate::error::{WebServerError, WebServerResult};
use crate::services::{DataRouter, HttpBackendClient, MockDataSource};
use crate::state::WebServerState;
use crate::web::handlers::{api, compare, runs};

/// Largest accepted document upload
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Build state with the mock fixtures and the HTTP backend client
pub fn build_state(config: WebServerConfig) -> WebServerResult<Arc<WebServerState>> {
    let mock = Arc::new(MockDataSource::new(config.mock_delay));
    let live = Arc::new(HttpBackendClient::new(config.backend_url.clone(), config.backend_timeout)?);
    let backend = Arc::new(DataRouter::new(config.initial_mode, mock.clone(), live));

    Ok(Arc::new(WebServerState::new(config, backend, mock)))
}

/// Main webserver struct
#[derive(Clone)]
pub struct WebServer {
    state: Arc<WebServerState>,
}

impl WebServer {
    pub fn new(state: Arc<WebServerState>) -> Self {
        Self { state }
    }

    /// Create a webserver with the default data sources
    pub fn from_config(config: WebServerConfig) -> WebServerResult<Self> {
        Ok(Self::new(build_state(config)?))
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        let api = Router::new()
            .route("/mode", get(api::get_mode).put(api::set_mode))
            .route(
                "/documents/classify",
                post(api::classify_document).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
            )
            .route("/documents/current", get(api::current_document))
            .route("/index", post(api::build_index))
            .route("/validations", get(api::validations))
            .route("/alerts/:document_id", get(api::document_alerts))
            .route("/kpis", get(api::kpis))
            .route("/runs", get(runs::list_runs))
            .route("/runs/:id", get(runs::get_run))
            .route("/runs/:id/results", get(runs::get_run_results))
            .route("/runs/:id/logs", get(runs::get_run_logs))
            .route("/compare", get(compare::get_comparison))
            .route("/compare/refresh", post(compare::refresh_comparison));

        Router::new()
            .route("/health", get(api::health))
            .nest("/api", api)
            .fallback_service(ServeDir::new(&self.state.config.static_dir))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive()),
            )
            .with_state(self.state.clone())
    }

    /// Serve until Ctrl+C
    pub async fn run(&self) -> WebServerResult<()> {
        let bind_address = self.state.config.bind_address;
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(bind_address)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {bind_address}: {e}")))?;

        info!(
            address = %bind_address,
            mode = %self.state.backend.mode().await,
            static_dir = %self.state.config.static_dir.display(),
            "web server listening"
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Server error: {e}")))?;

        Ok(())
    }

    /// Get server state for external access
    pub fn state(&self) -> &Arc<WebServerState> {
        &self.state
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown("webserver", "Received Ctrl+C signal"),
        Err(err) => logging::log_error("webserver", "Signal handling", &err),
    }
}
