//! Mode switch between the mock fixtures and the live backend

use std::sync::Arc;

use async_trait::async_trait;
use shared::{ClassifiedDocument, DataMode, IndexBuildResult, RagAlert, RagValidation};
use tokio::sync::RwLock;
use tracing::info;

use crate::error::WebServerResult;
use crate::traits::TenderBackend;
use crate::types::DocumentUpload;

/// Routes backend calls according to the current [`DataMode`]
pub struct DataRouter {
    mode: RwLock<DataMode>,
    mock: Arc<dyn TenderBackend>,
    live: Arc<dyn TenderBackend>,
}

impl DataRouter {
    pub fn new(initial_mode: DataMode, mock: Arc<dyn TenderBackend>, live: Arc<dyn TenderBackend>) -> Self {
        Self {
            mode: RwLock::new(initial_mode),
            mock,
            live,
        }
    }

    pub async fn mode(&self) -> DataMode {
        *self.mode.read().await
    }

    /// Switch mode, returning the previous one
    pub async fn set_mode(&self, mode: DataMode) -> DataMode {
        let mut current = self.mode.write().await;
        let previous = std::mem::replace(&mut *current, mode);
        if previous != mode {
            info!(from = %previous, to = %mode, "data mode switched");
        }
        previous
    }

    async fn active(&self) -> Arc<dyn TenderBackend> {
        match self.mode().await {
            DataMode::Mock => Arc::clone(&self.mock),
            DataMode::Api => Arc::clone(&self.live),
        }
    }
}

#[async_trait]
impl TenderBackend for DataRouter {
    async fn classify_document(&self, upload: DocumentUpload) -> WebServerResult<ClassifiedDocument> {
        self.active().await.classify_document(upload).await
    }

    async fn build_vector_index(&self) -> WebServerResult<IndexBuildResult> {
        self.active().await.build_vector_index().await
    }

    async fn validate_documents(&self) -> WebServerResult<Vec<RagValidation>> {
        self.active().await.validate_documents().await
    }

    async fn document_alerts(&self, document_id: i64) -> WebServerResult<RagAlert> {
        self.active().await.document_alerts(document_id).await
    }
}
