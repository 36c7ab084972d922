//! Command line and environment configuration

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use shared::DataMode;

use crate::error::{WebServerError, WebServerResult};

/// Command line arguments, each with a `TENDERMIND_*` environment fallback
#[derive(Parser, Debug, Clone)]
#[command(name = "tendermind")]
#[command(about = "Tender review dashboard server")]
pub struct Args {
    /// Port for HTTP server (browser connections)
    #[arg(long, env = "TENDERMIND_PORT", default_value = "8080")]
    pub port: u16,

    /// Interface to bind
    #[arg(long, env = "TENDERMIND_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Data mode at startup (mock or api)
    #[arg(long, env = "TENDERMIND_MODE", default_value = "mock")]
    pub mode: DataMode,

    /// Base URL of the classification/RAG backend
    #[arg(long, env = "TENDERMIND_BACKEND_URL", default_value = "http://localhost:8000")]
    pub backend_url: String,

    /// Backend request timeout in seconds
    #[arg(long, env = "TENDERMIND_BACKEND_TIMEOUT_SECS", default_value = "30")]
    pub backend_timeout_secs: u64,

    /// Simulated latency of mock responses in milliseconds
    #[arg(long, env = "TENDERMIND_MOCK_DELAY_MS", default_value = "0")]
    pub mock_delay_ms: u64,

    /// Static files directory
    #[arg(long, env = "TENDERMIND_STATIC_DIR", default_value = "./static")]
    pub static_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "TENDERMIND_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Validated server configuration
#[derive(Debug, Clone)]
pub struct WebServerConfig {
    pub bind_address: SocketAddr,
    pub initial_mode: DataMode,
    pub backend_url: String,
    pub backend_timeout: Duration,
    pub mock_delay: Duration,
    pub static_dir: PathBuf,
    pub log_level: String,
}

impl WebServerConfig {
    pub fn from_args(args: Args) -> WebServerResult<Self> {
        let bind_address: SocketAddr = format!("{}:{}", args.host, args.port)
            .parse()
            .map_err(|e| WebServerError::config(format!("Invalid bind address {}:{}: {e}", args.host, args.port)))?;

        let backend_url = args.backend_url.trim_end_matches('/').to_string();
        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(WebServerError::config(format!("Backend URL must be http(s): {}", args.backend_url)));
        }

        if args.backend_timeout_secs == 0 {
            return Err(WebServerError::config("Backend timeout must be at least one second"));
        }

        Ok(Self {
            bind_address,
            initial_mode: args.mode,
            backend_url,
            backend_timeout: Duration::from_secs(args.backend_timeout_secs),
            mock_delay: Duration::from_millis(args.mock_delay_ms),
            static_dir: args.static_dir,
            log_level: args.log_level,
        })
    }
}

impl Default for WebServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 8080)),
            initial_mode: DataMode::Mock,
            backend_url: "http://localhost:8000".to_string(),
            backend_timeout: Duration::from_secs(30),
            mock_delay: Duration::ZERO,
            static_dir: PathBuf::from("./static"),
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        let mut argv = vec!["tendermind"];
        argv.extend_from_slice(args);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_explicit_arguments() {
        let args = parse(&[
            "--port",
            "9000",
            "--mode",
            "api",
            "--backend-url",
            "http://backend:8000/",
            "--mock-delay-ms",
            "250",
        ]);
        let config = WebServerConfig::from_args(args).unwrap();

        assert_eq!(config.bind_address.port(), 9000);
        assert_eq!(config.initial_mode, DataMode::Api);
        assert_eq!(config.backend_url, "http://backend:8000");
        assert_eq!(config.mock_delay, Duration::from_millis(250));
    }

    #[test]
    fn test_invalid_mode_is_rejected() {
        assert!(Args::try_parse_from(["tendermind", "--mode", "remote"]).is_err());
    }

    #[test]
    fn test_invalid_backend_url() {
        let args = parse(&["--backend-url", "localhost:8000"]);
        assert!(matches!(WebServerConfig::from_args(args), Err(WebServerError::ConfigError(_))));
    }

    #[test]
    fn test_invalid_host() {
        let args = parse(&["--host", "not a host"]);
        assert!(WebServerConfig::from_args(args).is_err());
    }
}
