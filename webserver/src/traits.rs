//! Service trait definitions for dependency injection
//!
//! All I/O operations are abstracted through these traits for testability

use async_trait::async_trait;
use shared::{ClassifiedDocument, IndexBuildResult, KpiData, LogEntry, OfferRow, RagAlert, RagValidation, Run, RunResults};

use crate::error::WebServerResult;
use crate::types::DocumentUpload;

/// Document classification and RAG validation backend
#[mockall::automock]
#[async_trait]
pub trait TenderBackend: Send + Sync {
    /// Extract taxpayer data and classify the sections of an uploaded PDF
    async fn classify_document(&self, upload: DocumentUpload) -> WebServerResult<ClassifiedDocument>;

    /// Rebuild the vector index over the classified documents
    async fn build_vector_index(&self) -> WebServerResult<IndexBuildResult>;

    /// Validate the indexed documents against the knowledge base
    async fn validate_documents(&self) -> WebServerResult<Vec<RagValidation>>;

    /// Improvement recommendations for one document
    async fn document_alerts(&self, document_id: i64) -> WebServerResult<RagAlert>;
}

/// Run history, offers and indicators shown by the dashboard
#[mockall::automock]
#[async_trait]
pub trait DashboardSource: Send + Sync {
    async fn runs(&self) -> WebServerResult<Vec<Run>>;

    async fn run_by_id(&self, run_id: &str) -> WebServerResult<Option<Run>>;

    async fn run_results(&self, run_id: &str) -> WebServerResult<Option<RunResults>>;

    /// Log lines of a run; unknown runs have no logs
    async fn run_logs(&self, run_id: &str) -> WebServerResult<Vec<LogEntry>>;

    /// Offer set for one comparison session
    async fn offers(&self) -> WebServerResult<Vec<OfferRow>>;

    async fn kpis(&self) -> WebServerResult<KpiData>;
}
