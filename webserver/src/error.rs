//! WebServer-specific error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use shared::SharedError;
use thiserror::Error;

use crate::core::ComparisonError;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("HTTP server startup failed: {0}")]
    ServerStartup(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid request format: {details}")]
    InvalidRequest { details: String },

    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    #[error("Backend request to {endpoint} failed: {message}")]
    BackendFailed { endpoint: String, message: String },

    #[error("Backend returned HTTP {status} for {endpoint}")]
    BackendStatus { endpoint: String, status: u16 },

    #[error("Comparison error: {0}")]
    Comparison(#[from] ComparisonError),

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

}

impl WebServerError {
    pub fn config(message: impl Into<String>) -> Self {
        WebServerError::ConfigError(message.into())
    }

    pub fn invalid(details: impl Into<String>) -> Self {
        WebServerError::InvalidRequest { details: details.into() }
    }

    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        WebServerError::NotFound { resource, id: id.into() }
    }

    pub fn backend(endpoint: impl Into<String>, message: impl std::fmt::Display) -> Self {
        WebServerError::BackendFailed {
            endpoint: endpoint.into(),
            message: message.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            WebServerError::InvalidRequest { .. } | WebServerError::Comparison(_) => StatusCode::BAD_REQUEST,
            WebServerError::SharedError(SharedError::UnknownVariant { .. } | SharedError::InvalidConfig { .. }) => {
                StatusCode::BAD_REQUEST
            }
            WebServerError::NotFound { .. } => StatusCode::NOT_FOUND,
            WebServerError::BackendFailed { .. } | WebServerError::BackendStatus { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        let body = Json(json!({
            "status": "error",
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
