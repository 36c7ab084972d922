//! REST API handlers
//!
//! Health, data mode and backend-backed document endpoints

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    response::Json,
};
use chrono::Utc;
use shared::{ClassifiedDocument, IndexBuildResult, KpiData, RagAlert, RagValidation};
use tracing::info;

use crate::core::format_file_size;
use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::traits::TenderBackend;
use crate::types::{DocumentUpload, HealthResponse, ModeRequest, ModeResponse};

/// Health check endpoint
pub async fn health(State(state): State<Arc<WebServerState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        mode: state.backend.mode().await,
        uptime_seconds: state.get_uptime_seconds(),
        timestamp: Utc::now().timestamp(),
    })
}

/// Current data mode - GET /api/mode
pub async fn get_mode(State(state): State<Arc<WebServerState>>) -> Json<ModeResponse> {
    Json(ModeResponse {
        mode: state.backend.mode().await,
        backend_url: state.config.backend_url.clone(),
    })
}

/// Switch data mode - PUT /api/mode
pub async fn set_mode(
    State(state): State<Arc<WebServerState>>,
    Json(request): Json<ModeRequest>,
) -> Json<ModeResponse> {
    state.backend.set_mode(request.mode).await;
    Json(ModeResponse {
        mode: request.mode,
        backend_url: state.config.backend_url.clone(),
    })
}

/// Classify an uploaded PDF - POST /api/documents/classify
///
/// Expects a multipart body with a `file` field. The result becomes the
/// current document.
pub async fn classify_document(
    State(state): State<Arc<WebServerState>>,
    mut multipart: Multipart,
) -> WebServerResult<Json<ClassifiedDocument>> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| WebServerError::invalid(format!("malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("document.pdf").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| WebServerError::invalid(format!("failed to read upload: {e}")))?;

        upload = Some(DocumentUpload {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    let upload = upload.ok_or_else(|| WebServerError::invalid("missing 'file' field"))?;
    if upload.bytes.is_empty() {
        return Err(WebServerError::invalid("uploaded file is empty"));
    }
    if !upload.is_pdf() {
        return Err(WebServerError::invalid(format!("'{}' is not a PDF", upload.file_name)));
    }

    info!(
        file = %upload.file_name,
        size = %format_file_size(upload.bytes.len() as u64),
        "classifying document"
    );
    let document = state.backend.classify_document(upload).await?;
    state.set_current_document(Some(document.clone())).await;

    Ok(Json(document))
}

/// Last classified document - GET /api/documents/current
pub async fn current_document(State(state): State<Arc<WebServerState>>) -> WebServerResult<Json<ClassifiedDocument>> {
    state
        .current_document()
        .await
        .map(Json)
        .ok_or_else(|| WebServerError::not_found("document", "current"))
}

/// Build the RAG vector index - POST /api/index
pub async fn build_index(State(state): State<Arc<WebServerState>>) -> WebServerResult<Json<IndexBuildResult>> {
    let result = state.backend.build_vector_index().await?;
    info!(count = result.count, "vector index built");
    Ok(Json(result))
}

/// RAG validations - GET /api/validations
pub async fn validations(State(state): State<Arc<WebServerState>>) -> WebServerResult<Json<Vec<RagValidation>>> {
    Ok(Json(state.backend.validate_documents().await?))
}

/// Improvement alerts of a document - GET /api/alerts/:document_id
pub async fn document_alerts(
    State(state): State<Arc<WebServerState>>,
    Path(document_id): Path<i64>,
) -> WebServerResult<Json<RagAlert>> {
    Ok(Json(state.backend.document_alerts(document_id).await?))
}

/// Landing-page indicators - GET /api/kpis
pub async fn kpis(State(state): State<Arc<WebServerState>>) -> WebServerResult<Json<KpiData>> {
    Ok(Json(state.dashboard.kpis().await?))
}
