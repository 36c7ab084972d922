//! HTTP client for the classification/RAG backend
//!
//! Relays uploads and queries to the backend's REST endpoints and maps
//! transport and status failures onto [`WebServerError`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use shared::{ClassifiedDocument, IndexBuildResult, RagAlert, RagValidation};
use tracing::{debug, warn};

use crate::error::{WebServerError, WebServerResult};
use crate::traits::TenderBackend;
use crate::types::DocumentUpload;

const CLASSIFY_ENDPOINT: &str = "/clasificacion/clasificar/";
const BUILD_INDEX_ENDPOINT: &str = "/deteccion/crear_base_vectorial";
const VALIDATE_ENDPOINT: &str = "/deteccion/validar_documentos";
const ALERTS_ENDPOINT: &str = "/alert/sugerir_mejoras_alertas";

/// Live backend client
#[derive(Debug, Clone)]
pub struct HttpBackendClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackendClient {
    /// Create a client for `base_url` with a per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> WebServerResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WebServerError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Send a prepared request and decode a JSON body
    async fn send_json<T>(&self, endpoint: &str, request: reqwest::RequestBuilder) -> WebServerResult<T>
    where
        T: DeserializeOwned,
    {
        debug!(endpoint, "backend request");

        let response = request.send().await.map_err(|e| {
            warn!(endpoint, error = %e, "backend unreachable");
            WebServerError::backend(endpoint, e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint, status = status.as_u16(), "backend returned an error status");
            return Err(WebServerError::BackendStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| WebServerError::backend(endpoint, format!("invalid response body: {e}")))
    }
}

#[async_trait]
impl TenderBackend for HttpBackendClient {
    async fn classify_document(&self, upload: DocumentUpload) -> WebServerResult<ClassifiedDocument> {
        let content_type = upload.content_type.as_deref().unwrap_or("application/pdf");
        let part = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(content_type)
            .map_err(|e| WebServerError::invalid(format!("invalid content type '{content_type}': {e}")))?;
        let form = Form::new().part("file", part);

        let request = self.client.post(self.url(CLASSIFY_ENDPOINT)).multipart(form);
        self.send_json(CLASSIFY_ENDPOINT, request).await
    }

    async fn build_vector_index(&self) -> WebServerResult<IndexBuildResult> {
        let request = self.client.post(self.url(BUILD_INDEX_ENDPOINT));
        self.send_json(BUILD_INDEX_ENDPOINT, request).await
    }

    async fn validate_documents(&self) -> WebServerResult<Vec<RagValidation>> {
        let request = self.client.get(self.url(VALIDATE_ENDPOINT));
        self.send_json(VALIDATE_ENDPOINT, request).await
    }

    async fn document_alerts(&self, document_id: i64) -> WebServerResult<RagAlert> {
        let endpoint = format!("{ALERTS_ENDPOINT}/{document_id}");
        let request = self.client.get(self.url(&endpoint));
        self.send_json(&endpoint, request).await
    }
}
