//! Mock data source
//!
//! Serves the demo fixtures for every dashboard view, optionally delayed to
//! mimic backend latency.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use shared::{ClassifiedDocument, IndexBuildResult, KpiData, LogEntry, OfferRow, RagAlert, RagValidation, Run, RunResults};
use tracing::debug;

use crate::error::WebServerResult;
use crate::services::mock_data;
use crate::traits::{DashboardSource, TenderBackend};
use crate::types::DocumentUpload;

/// In-memory fixture source
#[derive(Debug, Clone)]
pub struct MockDataSource {
    delay: Duration,
    runs: Vec<Run>,
    logs: HashMap<String, Vec<LogEntry>>,
    results: HashMap<String, RunResults>,
    offers: Vec<OfferRow>,
    kpis: KpiData,
}

impl MockDataSource {
    /// Create a source serving the demo fixtures
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            runs: mock_data::runs(),
            logs: mock_data::logs(),
            results: mock_data::results(),
            offers: mock_data::offers(),
            kpis: mock_data::kpis(),
        }
    }

    /// Replace the offer fixtures
    pub fn with_offers(mut self, offers: Vec<OfferRow>) -> Self {
        self.offers = offers;
        self
    }

    /// Replace the run fixtures
    pub fn with_runs(mut self, runs: Vec<Run>) -> Self {
        self.runs = runs;
        self
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

impl Default for MockDataSource {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[async_trait]
impl TenderBackend for MockDataSource {
    async fn classify_document(&self, upload: DocumentUpload) -> WebServerResult<ClassifiedDocument> {
        self.simulate_latency().await;
        debug!(file = %upload.file_name, bytes = upload.bytes.len(), "mock classification");
        Ok(mock_data::classified_document())
    }

    async fn build_vector_index(&self) -> WebServerResult<IndexBuildResult> {
        self.simulate_latency().await;
        Ok(mock_data::index_build())
    }

    async fn validate_documents(&self) -> WebServerResult<Vec<RagValidation>> {
        self.simulate_latency().await;
        Ok(mock_data::validations())
    }

    async fn document_alerts(&self, _document_id: i64) -> WebServerResult<RagAlert> {
        self.simulate_latency().await;
        Ok(mock_data::alerts())
    }
}

#[async_trait]
impl DashboardSource for MockDataSource {
    async fn runs(&self) -> WebServerResult<Vec<Run>> {
        self.simulate_latency().await;
        Ok(self.runs.clone())
    }

    async fn run_by_id(&self, run_id: &str) -> WebServerResult<Option<Run>> {
        self.simulate_latency().await;
        Ok(self.runs.iter().find(|run| run.id == run_id).cloned())
    }

    async fn run_results(&self, run_id: &str) -> WebServerResult<Option<RunResults>> {
        self.simulate_latency().await;
        Ok(self.results.get(run_id).cloned())
    }

    async fn run_logs(&self, run_id: &str) -> WebServerResult<Vec<LogEntry>> {
        self.simulate_latency().await;
        Ok(self.logs.get(run_id).cloned().unwrap_or_default())
    }

    async fn offers(&self) -> WebServerResult<Vec<OfferRow>> {
        self.simulate_latency().await;
        Ok(self.offers.clone())
    }

    async fn kpis(&self) -> WebServerResult<KpiData> {
        self.simulate_latency().await;
        Ok(self.kpis.clone())
    }
}
