//! Run history handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use shared::{LogEntry, Run, RunResults};

use crate::core::{StatusFilter, filter_logs, filter_runs};
use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::types::{LogsQuery, RunsQuery};

/// GET /api/runs?search=&status=
pub async fn list_runs(
    State(state): State<Arc<WebServerState>>,
    Query(query): Query<RunsQuery>,
) -> WebServerResult<Json<Vec<Run>>> {
    let status: StatusFilter = query.status.as_deref().unwrap_or("ALL").parse()?;
    let runs = state.dashboard.runs().await?;
    let visible = filter_runs(&runs, &query.search, status).into_iter().cloned().collect();
    Ok(Json(visible))
}

/// GET /api/runs/:id
pub async fn get_run(
    State(state): State<Arc<WebServerState>>,
    Path(run_id): Path<String>,
) -> WebServerResult<Json<Run>> {
    state
        .dashboard
        .run_by_id(&run_id)
        .await?
        .map(Json)
        .ok_or_else(|| WebServerError::not_found("run", run_id))
}

/// GET /api/runs/:id/results
pub async fn get_run_results(
    State(state): State<Arc<WebServerState>>,
    Path(run_id): Path<String>,
) -> WebServerResult<Json<RunResults>> {
    state
        .dashboard
        .run_results(&run_id)
        .await?
        .map(Json)
        .ok_or_else(|| WebServerError::not_found("results", run_id))
}

/// GET /api/runs/:id/logs?search=
pub async fn get_run_logs(
    State(state): State<Arc<WebServerState>>,
    Path(run_id): Path<String>,
    Query(query): Query<LogsQuery>,
) -> WebServerResult<Json<Vec<LogEntry>>> {
    if state.dashboard.run_by_id(&run_id).await?.is_none() {
        return Err(WebServerError::not_found("run", run_id));
    }
    let logs = state.dashboard.run_logs(&run_id).await?;
    Ok(Json(filter_logs(&logs, &query.search).into_iter().cloned().collect()))
}
