//! Offer comparison engine
//!
//! Pure business logic with no I/O dependencies: given an immutable offer set
//! and a [`ViewState`], derive the visible rows, the per-field difference
//! predicate and the selection summary.
//!
//! Highlighting is scoped to the rows that survive the search filter, while
//! the selection summary reads from the full offer set. A vendor that is
//! selected and then hidden by a later search still counts towards the
//! averages.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use shared::OfferRow;
use thiserror::Error;

use crate::core::fields::{OfferField, SortKey};
use crate::core::format::format_currency;
use crate::core::view_state::{SortDirection, ViewState};

/// The only way deriving a view can fail
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComparisonError {
    #[error("Invalid sort field: {field}")]
    InvalidSortField { field: String },
}

pub type ComparisonResult<T> = Result<T, ComparisonError>;

/// Averages over the selected vendors that exist in the offer set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSummary {
    /// Selected vendors found in the offer set (the averaging denominator)
    pub matched: usize,
    pub avg_compliance_score: u32,
    pub avg_budget: u64,
    pub avg_budget_display: String,
    pub avg_delivery_days: u32,
}

/// Output of [`compute_view`], borrowing rows from the input slice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedView<'a> {
    pub visible_rows: Vec<&'a OfferRow>,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
    pub selection_summary: Option<SelectionSummary>,
    highlight_enabled: bool,
}

impl<'a> DerivedView<'a> {
    /// True iff at least two visible rows disagree on `field`
    ///
    /// Evaluated on demand; order of the visible rows is irrelevant.
    pub fn field_differs(&self, field: OfferField) -> bool {
        let mut values = self.visible_rows.iter().map(|row| field.value(row));
        match values.next() {
            Some(first) => values.any(|value| value != first),
            None => false,
        }
    }

    /// Same as [`field_differs`](Self::field_differs) for a wire field name
    pub fn field_differs_by_name(&self, name: &str) -> ComparisonResult<bool> {
        Ok(self.field_differs(name.parse::<OfferField>()?))
    }

    /// Whether `field` should be emphasised given the highlight toggle
    pub fn highlight(&self, field: OfferField) -> bool {
        self.highlight_enabled && self.field_differs(field)
    }

    pub fn highlight_enabled(&self) -> bool {
        self.highlight_enabled
    }

    pub fn vendors(&self) -> Vec<&'a str> {
        self.visible_rows.iter().map(|row| row.vendor.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.visible_rows.is_empty()
    }
}

/// Derive the comparison view for `rows` under `state`
///
/// Fails only with [`ComparisonError::InvalidSortField`]; no partial view is
/// produced in that case.
pub fn compute_view<'a>(rows: &'a [OfferRow], state: &ViewState) -> ComparisonResult<DerivedView<'a>> {
    let sort_key: SortKey = state.sort_field.parse()?;

    let mut visible_rows = filter_rows(rows, &state.search_term);

    // sort_by is stable: ties keep their input order in both directions
    visible_rows.sort_by(|a, b| {
        let ordering = sort_key.compare(a, b);
        match state.sort_direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    Ok(DerivedView {
        visible_rows,
        sort_key,
        sort_direction: state.sort_direction,
        selection_summary: summarize_selection(rows, &state.selected_vendors),
        highlight_enabled: state.highlight_differences,
    })
}

/// Rows whose vendor contains `search_term`, case-insensitively, in input order
pub fn filter_rows<'a>(rows: &'a [OfferRow], search_term: &str) -> Vec<&'a OfferRow> {
    let needle = search_term.to_lowercase();
    rows.iter().filter(|row| row.vendor.to_lowercase().contains(&needle)).collect()
}

/// Average the selected vendors' scores, budgets and delivery times
///
/// Absent when nothing is selected or no selected vendor exists in `rows`.
/// Selected names missing from `rows` are excluded from the denominator.
pub fn summarize_selection(rows: &[OfferRow], selected: &BTreeSet<String>) -> Option<SelectionSummary> {
    if selected.is_empty() {
        return None;
    }

    let matched: Vec<&OfferRow> = rows.iter().filter(|row| selected.contains(&row.vendor)).collect();
    if matched.is_empty() {
        return None;
    }

    let count = matched.len() as f64;
    let average = |total: u128| (total as f64 / count).round();

    let score_total: u128 = matched.iter().map(|row| u128::from(row.compliance_score)).sum();
    let budget_total: u128 = matched.iter().map(|row| u128::from(row.budget)).sum();
    let delivery_total: u128 = matched.iter().map(|row| u128::from(row.terms.delivery_days)).sum();

    let avg_budget = average(budget_total) as u64;

    Some(SelectionSummary {
        matched: matched.len(),
        avg_compliance_score: average(score_total) as u32,
        avg_budget,
        avg_budget_display: format_currency(i64::try_from(avg_budget).unwrap_or(i64::MAX)),
        avg_delivery_days: average(delivery_total) as u32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::DeliveryTerms;

    fn row(vendor: &str, score: u8, budget: u64, delivery_days: u32) -> OfferRow {
        OfferRow {
            vendor: vendor.to_string(),
            compliance_score: score,
            risk_high: 0,
            risk_medium: 1,
            risk_low: 2,
            budget,
            terms: DeliveryTerms {
                delivery_days,
                payment: "30 días".to_string(),
                penalties: "0.1% diario".to_string(),
            },
            notes: String::new(),
        }
    }

    fn sample_rows() -> Vec<OfferRow> {
        vec![
            row("Empresa A S.A.", 95, 150_000, 90),
            row("Consultora B Ltda.", 87, 135_000, 120),
            row("Soluciones C Corp.", 78, 125_000, 75),
        ]
    }

    #[test]
    fn test_default_view_sorts_by_score_descending() {
        let rows = sample_rows();
        let view = compute_view(&rows, &ViewState::default()).unwrap();

        assert_eq!(view.vendors(), vec!["Empresa A S.A.", "Consultora B Ltda.", "Soluciones C Corp."]);
        assert_eq!(view.sort_key.field(), OfferField::ComplianceScore);
        assert!(view.selection_summary.is_none());
    }

    #[test]
    fn test_ascending_budget_sort() {
        let rows = sample_rows();
        let state = ViewState::new().with_sort("budget", SortDirection::Ascending);
        let view = compute_view(&rows, &state).unwrap();

        assert_eq!(view.vendors(), vec!["Soluciones C Corp.", "Consultora B Ltda.", "Empresa A S.A."]);
    }

    #[test]
    fn test_vendor_sort_is_locale_aware() {
        let rows = vec![row("zeta", 1, 1, 1), row("Álvarez", 2, 2, 2), row("beta", 3, 3, 3)];
        let state = ViewState::new().with_sort("vendor", SortDirection::Ascending);
        let view = compute_view(&rows, &state).unwrap();
        assert_eq!(view.vendors(), vec!["Álvarez", "beta", "zeta"]);

        let state = ViewState::new().with_sort("vendor", SortDirection::Descending);
        let view = compute_view(&rows, &state).unwrap();
        assert_eq!(view.vendors(), vec!["zeta", "beta", "Álvarez"]);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let rows = sample_rows();
        let view = compute_view(&rows, &ViewState::new().with_search("CONSULT")).unwrap();
        assert_eq!(view.vendors(), vec!["Consultora B Ltda."]);

        let view = compute_view(&rows, &ViewState::new().with_search("s.a")).unwrap();
        assert_eq!(view.vendors(), vec!["Empresa A S.A."]);

        let view = compute_view(&rows, &ViewState::new().with_search("nobody")).unwrap();
        assert!(view.is_empty());
    }

    #[test]
    fn test_filter_partitions_rows() {
        let rows = sample_rows();
        for term in ["", "a", "S.", "corp", "ltda", "x", "EMPRESA"] {
            let view = compute_view(&rows, &ViewState::new().with_search(term)).unwrap();
            let needle = term.to_lowercase();
            for candidate in &rows {
                let matches = candidate.vendor.to_lowercase().contains(&needle);
                let shown = view.visible_rows.iter().any(|r| r.vendor == candidate.vendor);
                assert_eq!(matches, shown, "term {term:?}, vendor {}", candidate.vendor);
            }
        }
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let rows = vec![
            row("first", 80, 1, 1),
            row("second", 90, 2, 2),
            row("third", 80, 3, 3),
            row("fourth", 90, 4, 4),
            row("fifth", 80, 5, 5),
        ];

        let desc = compute_view(&rows, &ViewState::default()).unwrap();
        assert_eq!(desc.vendors(), vec!["second", "fourth", "first", "third", "fifth"]);

        let asc = compute_view(&rows, &ViewState::new().with_sort("complianceScore", SortDirection::Ascending)).unwrap();
        assert_eq!(asc.vendors(), vec!["first", "third", "fifth", "second", "fourth"]);

        // Repeated renders do not reorder ties
        for _ in 0..5 {
            assert_eq!(compute_view(&rows, &ViewState::default()).unwrap().vendors(), desc.vendors());
        }
    }

    #[test]
    fn test_sort_by_nested_delivery_days() {
        let rows = sample_rows();
        let state = ViewState::new().with_sort("terms.deliveryDays", SortDirection::Ascending);
        let view = compute_view(&rows, &state).unwrap();
        assert_eq!(view.vendors(), vec!["Soluciones C Corp.", "Empresa A S.A.", "Consultora B Ltda."]);
    }

    #[test]
    fn test_idempotent() {
        let rows = sample_rows();
        let state = ViewState::new()
            .with_search("o")
            .with_sort("budget", SortDirection::Ascending)
            .with_highlight(true)
            .with_selection(["Empresa A S.A.", "Soluciones C Corp."]);

        let first = compute_view(&rows, &state).unwrap();
        let second = compute_view(&rows, &state).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_field_differs_boundaries() {
        let rows = sample_rows();

        let empty: Vec<OfferRow> = Vec::new();
        let view = compute_view(&empty, &ViewState::default()).unwrap();
        assert!(OfferField::ALL.iter().all(|field| !view.field_differs(*field)));

        let single = compute_view(&rows, &ViewState::new().with_search("empresa")).unwrap();
        assert_eq!(single.visible_rows.len(), 1);
        assert!(OfferField::ALL.iter().all(|field| !single.field_differs(*field)));

        let all = compute_view(&rows, &ViewState::default()).unwrap();
        assert!(all.field_differs(OfferField::ComplianceScore));
        assert!(all.field_differs(OfferField::Terms));
        // Identical across every row
        assert!(!all.field_differs(OfferField::RiskHigh));
        assert!(!all.field_differs(OfferField::Payment));
    }

    #[test]
    fn test_field_differs_scoped_to_visible_rows() {
        let rows = vec![row("Alpha One", 90, 100, 10), row("Alpha Two", 90, 200, 10), row("Beta", 50, 100, 10)];
        let view = compute_view(&rows, &ViewState::new().with_search("alpha")).unwrap();

        assert!(!view.field_differs(OfferField::ComplianceScore));
        assert!(view.field_differs(OfferField::Budget));
    }

    #[test]
    fn test_highlight_requires_toggle() {
        let rows = sample_rows();
        let off = compute_view(&rows, &ViewState::default()).unwrap();
        assert!(off.field_differs(OfferField::Budget));
        assert!(!off.highlight(OfferField::Budget));

        let on = compute_view(&rows, &ViewState::new().with_highlight(true)).unwrap();
        assert!(on.highlight(OfferField::Budget));
        assert!(!on.highlight(OfferField::RiskHigh));
    }

    #[test]
    fn test_field_differs_by_name() {
        let rows = sample_rows();
        let view = compute_view(&rows, &ViewState::default()).unwrap();

        assert_eq!(view.field_differs_by_name("complianceScore"), Ok(true));
        assert_eq!(view.field_differs_by_name("notes"), Ok(false));
        assert_eq!(
            view.field_differs_by_name("price"),
            Err(ComparisonError::InvalidSortField { field: "price".to_string() })
        );
    }

    #[test]
    fn test_selection_summary_example() {
        let rows = sample_rows();
        let state = ViewState::new().with_selection(["Empresa A S.A.", "Consultora B Ltda.", "Soluciones C Corp."]);
        let view = compute_view(&rows, &state).unwrap();

        let summary = view.selection_summary.unwrap();
        assert_eq!(summary.matched, 3);
        assert_eq!(summary.avg_compliance_score, 87);
        assert_eq!(summary.avg_budget, 136_667);
        assert_eq!(summary.avg_budget_display, "136.667 US$");
        assert_eq!(summary.avg_delivery_days, 95);
    }

    #[test]
    fn test_selection_ignores_search_filter() {
        let rows = sample_rows();
        let state = ViewState::new().with_search("empresa").with_selection(["Consultora B Ltda."]);
        let view = compute_view(&rows, &state).unwrap();

        assert_eq!(view.vendors(), vec!["Empresa A S.A."]);
        let summary = view.selection_summary.unwrap();
        assert_eq!(summary.matched, 1);
        assert_eq!(summary.avg_compliance_score, 87);
        assert_eq!(summary.avg_delivery_days, 120);
    }

    #[test]
    fn test_selection_denominator_counts_matched_rows_only() {
        let rows = sample_rows();
        let state = ViewState::new().with_selection(["Empresa A S.A.", "Gone Vendor"]);
        let summary = compute_view(&rows, &state).unwrap().selection_summary.unwrap();

        assert_eq!(summary.matched, 1);
        assert_eq!(summary.avg_compliance_score, 95);
        assert_eq!(summary.avg_budget, 150_000);

        let only_missing = ViewState::new().with_selection(["Gone Vendor"]);
        assert!(compute_view(&rows, &only_missing).unwrap().selection_summary.is_none());
    }

    #[test]
    fn test_invalid_sort_field_is_reported() {
        let rows = sample_rows();
        let state = ViewState::new().with_sort("terms", SortDirection::Descending);
        assert_eq!(
            compute_view(&rows, &state),
            Err(ComparisonError::InvalidSortField { field: "terms".to_string() })
        );

        let state = ViewState::new().with_sort("price", SortDirection::Ascending);
        assert!(matches!(
            compute_view(&rows, &state),
            Err(ComparisonError::InvalidSortField { .. })
        ));
    }

    #[test]
    fn test_empty_input() {
        let rows: Vec<OfferRow> = Vec::new();
        let state = ViewState::new().with_highlight(true).with_selection(["A"]);
        let view = compute_view(&rows, &state).unwrap();

        assert!(view.is_empty());
        assert!(view.selection_summary.is_none());
        assert!(!view.highlight(OfferField::Budget));
    }
}
