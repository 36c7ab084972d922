//! Shared logging utilities for consistent tracing across the dashboard

use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

/// Crates whose events pass the filter at the requested level
const OWN_TARGETS: &[&str] = &["webserver", "shared", "tendermind"];

/// Build the `EnvFilter` directive string for a base level
///
/// Own crates log at `base_level`; HTTP plumbing is kept quieter except for
/// the request trace layer.
pub fn filter_directives(base_level: &str) -> String {
    let mut directives: Vec<String> = OWN_TARGETS.iter().map(|target| format!("{target}={base_level}")).collect();
    directives.push(format!("tower_http={base_level}"));
    directives.push("hyper=warn".to_string());
    directives.push("reqwest=warn".to_string());
    directives.join(",")
}

/// Initialize the tracing subscriber with an optional log level
///
/// `RUST_LOG`, when set, takes precedence over the computed directives.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let base_level = log_level.unwrap_or("info");
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directives(base_level)));

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init();
}

/// Initialize tracing at the default level
pub fn init_tracing() {
    init_tracing_with_level(None);
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Contextual logging helper for startup messages
pub fn log_startup(component: &str, details: &str) {
    info!(
        component = component,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(component: &str, reason: &str) {
    info!(
        component = component,
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(component: &str, context: &str, error: &dyn std::fmt::Display) {
    error!(
        component = component,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for recoverable conditions
pub fn log_warning(component: &str, context: &str, details: &str) {
    warn!(
        component = component,
        timestamp = format_timestamp(),
        "⚠️ {}: {}",
        context,
        details
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(component: &str, message: &str) {
    info!(
        component = component,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directives() {
        let directives = filter_directives("debug");
        assert!(directives.contains("webserver=debug"));
        assert!(directives.contains("shared=debug"));
        assert!(directives.contains("tower_http=debug"));
        assert!(directives.contains("reqwest=warn"));
    }

    #[test]
    fn test_timestamp_format() {
        let stamp = format_timestamp();
        // HH:MM:SS.mmm
        assert_eq!(stamp.len(), 12);
        assert_eq!(&stamp[2..3], ":");
        assert_eq!(&stamp[8..9], ".");
    }

    #[test]
    fn test_init_is_idempotent() {
        init_tracing_with_level(Some("warn"));
        init_tracing();
        log_success("test", "tracing initialised twice without panicking");
    }
}
