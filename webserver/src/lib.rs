//! Webserver library for the TenderMind review dashboard
//!
//! Serves run history, document classification, RAG validation and the
//! vendor offer comparison over a JSON API, backed by either mock fixtures
//! or the analysis backend.

pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use config::{Args, WebServerConfig};
pub use error::{WebServerError, WebServerResult};
pub use state::{ComparisonSession, WebServerState};
pub use types::*;
pub use webserver_impl::{WebServer, build_state};

// Re-export trait definitions
pub use traits::{DashboardSource, TenderBackend};

// Re-export service implementations
pub use services::{DataRouter, HttpBackendClient, MockDataSource};
