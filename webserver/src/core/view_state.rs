//! Caller-held display parameters for the comparison view

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Sort order; descending is the natural order for scores
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Parse `asc`/`desc` (or the long forms)
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Some(SortDirection::Ascending),
            "desc" | "descending" => Some(SortDirection::Descending),
            _ => None,
        }
    }
}

/// Search, sort, highlight and selection settings for one comparison session
///
/// `sort_field` stays a plain name so that an unknown field can be reported
/// by the engine instead of being lost at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub search_term: String,
    pub sort_field: String,
    pub sort_direction: SortDirection,
    pub highlight_differences: bool,
    pub selected_vendors: BTreeSet<String>,
}

pub const DEFAULT_SORT_FIELD: &str = "complianceScore";

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            sort_field: DEFAULT_SORT_FIELD.to_string(),
            sort_direction: SortDirection::Descending,
            highlight_differences: false,
            selected_vendors: BTreeSet::new(),
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_field = field.into();
        self.sort_direction = direction;
        self
    }

    pub fn with_highlight(mut self, enabled: bool) -> Self {
        self.highlight_differences = enabled;
        self
    }

    pub fn with_selection<I, S>(mut self, vendors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_vendors = vendors.into_iter().map(Into::into).collect();
        self
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_sort(&mut self, field: impl Into<String>) {
        self.sort_field = field.into();
    }

    pub fn toggle_direction(&mut self) {
        self.sort_direction = self.sort_direction.toggled();
    }

    pub fn set_highlight(&mut self, enabled: bool) {
        self.highlight_differences = enabled;
    }

    /// Check or uncheck a vendor for the summary
    pub fn select_vendor(&mut self, vendor: &str, checked: bool) {
        if checked {
            self.selected_vendors.insert(vendor.to_string());
        } else {
            self.selected_vendors.remove(vendor);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_vendors.clear();
    }

    /// Restore the default sort (field and direction) after an invalid field was rejected
    pub fn reset_sort(&mut self) {
        self.sort_field = DEFAULT_SORT_FIELD.to_string();
        self.sort_direction = SortDirection::default();
    }
}
