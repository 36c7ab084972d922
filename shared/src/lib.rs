//! Shared types for the tender review dashboard
//!
//! Contains the data shapes exchanged with the analysis backend and the
//! browser, plus the common error type and logging bootstrap. Component
//! internal types (view state, derived views) live in their components.

pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use errors::*;
pub use types::*;

pub use messages::{
    // Offer comparison
    DeliveryTerms, OfferRow, validate_offers,

    // Run history
    Alert, AlertReference, LogEntry, ResultSections, Run, RunFile, RunResults,

    // Backend documents
    ClassifiedDocument, IndexBuildResult, Observations, RagAlert, RagValidation,

    // Dashboard
    ActivityPoint, KpiData,
};
