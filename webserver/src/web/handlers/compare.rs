//! Offer comparison handlers

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Json,
};
use shared::logging;
use tracing::info;

use crate::core::{
    ComparisonError, ComplianceBand, DerivedView, RiskSummary, ViewState, compute_view, format_currency,
};
use crate::error::WebServerResult;
use crate::state::WebServerState;
use crate::types::{CompareQuery, CompareResponse, CompareRowView, RefreshResponse, SortDescriptor};

/// GET /api/compare?search=&sort=&direction=&highlight=&selected=&diff_fields=
///
/// `selected` repeats, one vendor per occurrence. An unknown or structured
/// sort field falls back to the default sort and is reported in
/// `sortFallback`.
pub async fn get_comparison(
    State(state): State<Arc<WebServerState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> WebServerResult<Json<CompareResponse>> {
    let query = CompareQuery::from_pairs(pairs)?;
    let session = state.comparison_session().await?;
    let mut view_state = query.to_view_state()?;

    let (view, sort_fallback) = match compute_view(&session.rows, &view_state) {
        Ok(view) => (view, None),
        Err(ComparisonError::InvalidSortField { field }) => {
            logging::log_warning("compare", "Invalid sort field", &format!("'{field}', using default sort"));
            view_state.reset_sort();
            (compute_view(&session.rows, &view_state)?, Some(field))
        }
    };

    let mut field_differs = BTreeMap::new();
    let mut highlighted_fields = Vec::new();
    for name in query.diff_field_names() {
        let differs = view.field_differs_by_name(&name)?;
        if differs && view.highlight_enabled() {
            highlighted_fields.push(name.clone());
        }
        field_differs.insert(name, differs);
    }

    Ok(Json(CompareResponse {
        session_id: session.id,
        total_rows: session.rows.len(),
        rows: row_views(&view, &view_state),
        sort: SortDescriptor {
            field: view.sort_key.field().name().to_string(),
            direction: view.sort_direction,
        },
        sort_fallback,
        highlight_differences: view.highlight_enabled(),
        field_differs,
        highlighted_fields,
        selection: view.selection_summary.clone(),
    }))
}

fn row_views(view: &DerivedView<'_>, view_state: &ViewState) -> Vec<CompareRowView> {
    view.visible_rows
        .iter()
        .map(|row| CompareRowView {
            offer: (*row).clone(),
            compliance_band: ComplianceBand::from_score(row.compliance_score),
            risks: RiskSummary::of(row),
            budget_display: format_currency(i64::try_from(row.budget).unwrap_or(i64::MAX)),
            selected: view_state.selected_vendors.contains(&row.vendor),
        })
        .collect()
}

/// POST /api/compare/refresh
pub async fn refresh_comparison(State(state): State<Arc<WebServerState>>) -> WebServerResult<Json<RefreshResponse>> {
    let session = state.refresh_comparison().await?;
    info!(session = %session.id, "comparison refreshed");
    Ok(Json(RefreshResponse {
        session_id: session.id,
        rows: session.rows.len(),
    }))
}
