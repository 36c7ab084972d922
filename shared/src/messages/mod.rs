//! Message types exchanged with the analysis backend and the browser
//!
//! - `offers`: vendor offers for side-by-side comparison
//! - `runs`: analysis run history, results and logs
//! - `documents`: classification and RAG validation records
//! - `dashboard`: landing-page indicators

pub mod dashboard;
pub mod documents;
pub mod offers;
pub mod runs;

pub use dashboard::{ActivityPoint, KpiData};
pub use documents::{ClassifiedDocument, IndexBuildResult, Observations, RagAlert, RagValidation};
pub use offers::{DeliveryTerms, OfferRow, validate_offers};
pub use runs::{Alert, AlertReference, LogEntry, ResultSections, Run, RunFile, RunResults};
