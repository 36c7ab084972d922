//! Type definitions for webserver
//!
//! Request and response bodies of the HTTP API that are not shared with the
//! backend.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use shared::{DataMode, OfferRow};
use uuid::Uuid;

use crate::core::{ComplianceBand, OfferField, RiskSummary, SelectionSummary, SortDirection, ViewState};
use crate::error::{WebServerError, WebServerResult};

/// A PDF received from the browser, relayed to the backend as-is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl DocumentUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn is_pdf(&self) -> bool {
        let by_type = self.content_type.as_deref() == Some("application/pdf");
        let by_name = self.file_name.to_lowercase().ends_with(".pdf");
        let by_magic = self.bytes.starts_with(b"%PDF");
        by_type || by_name || by_magic
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeRequest {
    pub mode: DataMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeResponse {
    pub mode: DataMode,
    pub backend_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub mode: DataMode,
    pub uptime_seconds: u64,
    pub timestamp: i64,
}

/// Query of `GET /api/runs`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunsQuery {
    #[serde(default)]
    pub search: String,
    pub status: Option<String>,
}

/// Query of `GET /api/runs/:id/logs`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogsQuery {
    #[serde(default)]
    pub search: String,
}

/// Query of `GET /api/compare`, the wire form of [`ViewState`]
///
/// Built from the raw key/value pairs so that `selected` can repeat: each
/// occurrence names one vendor verbatim, commas included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareQuery {
    pub search: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
    pub highlight: Option<bool>,
    pub selected: Vec<String>,
    /// Field names to report differences for, repeated or comma-separated
    pub diff_fields: Vec<String>,
}

/// Fields the comparison table emphasises when they differ
pub const DISPLAYED_DIFF_FIELDS: [OfferField; 2] = [OfferField::ComplianceScore, OfferField::Budget];

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|item| !item.is_empty())
}

fn parse_flag(key: &str, value: &str) -> WebServerResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "on" => Ok(true),
        "false" | "0" | "off" => Ok(false),
        _ => Err(WebServerError::invalid(format!("invalid boolean for '{key}': '{value}'"))),
    }
}

impl CompareQuery {
    /// Collect the query from decoded `key=value` pairs; unknown keys are ignored
    pub fn from_pairs<I>(pairs: I) -> WebServerResult<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "search" => query.search = Some(value),
                "sort" => query.sort = Some(value),
                "direction" => query.direction = Some(value),
                "highlight" => query.highlight = Some(parse_flag(&key, &value)?),
                "selected" => {
                    let vendor = value.trim();
                    if !vendor.is_empty() {
                        query.selected.push(vendor.to_string());
                    }
                }
                "diff_fields" => query.diff_fields.extend(split_list(&value).map(str::to_string)),
                _ => {}
            }
        }
        Ok(query)
    }

    pub fn to_view_state(&self) -> WebServerResult<ViewState> {
        let mut state = ViewState::default();

        if let Some(search) = &self.search {
            state.set_search(search.clone());
        }
        if let Some(sort) = self.sort.as_deref().filter(|s| !s.trim().is_empty()) {
            state.set_sort(sort.trim());
        }
        if let Some(direction) = &self.direction {
            state.sort_direction = SortDirection::parse(direction)
                .ok_or_else(|| WebServerError::invalid(format!("unknown sort direction '{direction}'")))?;
        }
        if let Some(highlight) = self.highlight {
            state.set_highlight(highlight);
        }
        if !self.selected.is_empty() {
            state.selected_vendors = self.selected.iter().cloned().collect::<BTreeSet<_>>();
        }

        Ok(state)
    }

    /// Field names whose difference flag is requested; the displayed ones by default
    pub fn diff_field_names(&self) -> Vec<String> {
        if self.diff_fields.is_empty() {
            DISPLAYED_DIFF_FIELDS.iter().map(|field| field.name().to_string()).collect()
        } else {
            self.diff_fields.clone()
        }
    }
}

/// One visible offer with its presentation annotations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRowView {
    #[serde(flatten)]
    pub offer: OfferRow,
    pub compliance_band: ComplianceBand,
    pub risks: RiskSummary,
    pub budget_display: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortDescriptor {
    pub field: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareResponse {
    pub session_id: Uuid,
    pub total_rows: usize,
    pub rows: Vec<CompareRowView>,
    pub sort: SortDescriptor,
    /// Rejected sort field name when the default sort was used instead
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_fallback: Option<String>,
    pub highlight_differences: bool,
    /// Difference flag per requested field, over the visible rows
    pub field_differs: BTreeMap<String, bool>,
    /// Requested fields to emphasise (difference and toggle on)
    pub highlighted_fields: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<SelectionSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub session_id: Uuid,
    pub rows: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_yields_default_state() {
        let state = CompareQuery::default().to_view_state().unwrap();
        assert_eq!(state, ViewState::default());
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_query_to_view_state() {
        let query = CompareQuery::from_pairs(pairs(&[
            ("search", "sa"),
            ("sort", "budget"),
            ("direction", "asc"),
            ("highlight", "true"),
            ("selected", "Empresa A S.A."),
            ("selected", " Consultora B Ltda. "),
            ("selected", ""),
            ("page", "2"),
        ]))
        .unwrap();
        let state = query.to_view_state().unwrap();

        assert_eq!(state.search_term, "sa");
        assert_eq!(state.sort_field, "budget");
        assert_eq!(state.sort_direction, SortDirection::Ascending);
        assert!(state.highlight_differences);
        assert_eq!(state.selected_vendors.len(), 2);
        assert!(state.selected_vendors.contains("Consultora B Ltda."));
    }

    #[test]
    fn test_selected_vendor_may_contain_commas() {
        let query = CompareQuery::from_pairs(pairs(&[("selected", "Acme, Inc."), ("selected", "Beta")])).unwrap();
        let state = query.to_view_state().unwrap();

        assert_eq!(state.selected_vendors.len(), 2);
        assert!(state.selected_vendors.contains("Acme, Inc."));
    }

    #[test]
    fn test_bad_highlight_flag_is_rejected() {
        assert_eq!(CompareQuery::from_pairs(pairs(&[("highlight", "0")])).unwrap().highlight, Some(false));
        assert!(matches!(
            CompareQuery::from_pairs(pairs(&[("highlight", "maybe")])),
            Err(WebServerError::InvalidRequest { .. })
        ));
    }

    #[test]
    fn test_bad_direction_is_rejected() {
        let query = CompareQuery { direction: Some("up".to_string()), ..Default::default() };
        assert!(matches!(query.to_view_state(), Err(WebServerError::InvalidRequest { .. })));
    }

    #[test]
    fn test_diff_field_names() {
        assert_eq!(CompareQuery::default().diff_field_names(), vec!["complianceScore", "budget"]);
        let query = CompareQuery::from_pairs(pairs(&[("diff_fields", "notes, terms"), ("diff_fields", "vendor")])).unwrap();
        assert_eq!(query.diff_field_names(), vec!["notes", "terms", "vendor"]);
    }

    #[test]
    fn test_upload_pdf_detection() {
        assert!(DocumentUpload::new("oferta.PDF", Vec::new()).is_pdf());
        assert!(DocumentUpload::new("blob", b"%PDF-1.7".to_vec()).is_pdf());
        assert!(!DocumentUpload::new("notes.txt", b"hello".to_vec()).is_pdf());
    }
}
