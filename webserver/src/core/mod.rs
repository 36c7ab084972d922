//! Core business logic modules
//!
//! Pure business logic with no I/O dependencies

pub mod comparison;
pub mod fields;
pub mod format;
pub mod runs;
pub mod view_state;

// Re-export commonly used types
pub use comparison::{ComparisonError, ComparisonResult, DerivedView, SelectionSummary, compute_view};
pub use fields::{FieldValue, OfferField, SortKey};
pub use format::{ComplianceBand, RiskSummary, format_currency, format_file_size};
pub use runs::{StatusFilter, filter_logs, filter_runs};
pub use view_state::{SortDirection, ViewState};
