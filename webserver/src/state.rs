//! Webserver state management
//!
//! Runtime state shared by all handlers: the data sources, the current
//! comparison session and the last classified document.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use shared::{ClassifiedDocument, OfferRow, validate_offers};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::config::WebServerConfig;
use crate::error::WebServerResult;
use crate::services::DataRouter;
use crate::traits::DashboardSource;

/// One loaded offer set
///
/// Rows are shared read-only and replaced wholesale on refresh.
#[derive(Debug, Clone)]
pub struct ComparisonSession {
    pub id: Uuid,
    pub rows: Arc<Vec<OfferRow>>,
    pub loaded_at: DateTime<Utc>,
}

impl ComparisonSession {
    pub fn new(rows: Vec<OfferRow>) -> Self {
        Self {
            id: Uuid::new_v4(),
            rows: Arc::new(rows),
            loaded_at: Utc::now(),
        }
    }
}

/// Core webserver state
pub struct WebServerState {
    pub config: WebServerConfig,
    pub backend: Arc<DataRouter>,
    pub dashboard: Arc<dyn DashboardSource>,
    comparison: RwLock<Option<ComparisonSession>>,
    current_document: RwLock<Option<ClassifiedDocument>>,
    server_start_time: Instant,
}

impl WebServerState {
    pub fn new(config: WebServerConfig, backend: Arc<DataRouter>, dashboard: Arc<dyn DashboardSource>) -> Self {
        Self {
            config,
            backend,
            dashboard,
            comparison: RwLock::new(None),
            current_document: RwLock::new(None),
            server_start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }

    /// Current comparison session, loading it on first use
    pub async fn comparison_session(&self) -> WebServerResult<ComparisonSession> {
        if let Some(session) = self.comparison.read().await.as_ref() {
            return Ok(session.clone());
        }

        let mut slot = self.comparison.write().await;
        // Another request may have loaded it while we waited for the lock
        if let Some(session) = slot.as_ref() {
            return Ok(session.clone());
        }
        let session = self.load_session().await?;
        *slot = Some(session.clone());
        Ok(session)
    }

    /// Discard the current offer set and load a fresh one
    ///
    /// On failure the previous session is kept untouched.
    pub async fn refresh_comparison(&self) -> WebServerResult<ComparisonSession> {
        let session = self.load_session().await?;
        *self.comparison.write().await = Some(session.clone());
        Ok(session)
    }

    async fn load_session(&self) -> WebServerResult<ComparisonSession> {
        let rows = self.dashboard.offers().await?;
        validate_offers(&rows)?;
        let session = ComparisonSession::new(rows);
        info!(session = %session.id, rows = session.rows.len(), "comparison session loaded");
        Ok(session)
    }

    pub async fn current_document(&self) -> Option<ClassifiedDocument> {
        self.current_document.read().await.clone()
    }

    pub async fn set_current_document(&self, document: Option<ClassifiedDocument>) {
        *self.current_document.write().await = document;
    }
}
