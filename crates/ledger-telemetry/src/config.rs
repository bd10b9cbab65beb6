//! Telemetry configuration from environment variables.

use std::env;

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name stamped on log lines.
    pub service_name: String,

    /// Level filter (trace, debug, info, warn, error or an `EnvFilter`
    /// directive string).
    pub log_level: String,

    /// Whether to emit JSON-formatted lines.
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "settlement-chain".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// - `SC_SERVICE_NAME`: service name (default: settlement-chain)
    /// - `SC_LOG_LEVEL` or `RUST_LOG`: level filter (default: info)
    /// - `SC_LOG_JSON`: emit JSON lines (default: false)
    pub fn from_env() -> Self {
        Self {
            service_name: env::var("SC_SERVICE_NAME")
                .unwrap_or_else(|_| "settlement-chain".to_string()),

            log_level: env::var("SC_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            json_logs: env::var("SC_LOG_JSON")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
        }
    }

    /// Configuration for a named service, other knobs from the
    /// environment.
    pub fn for_service(service_name: &str) -> Self {
        let mut config = Self::from_env();
        config.service_name = service_name.to_string();
        config
    }
}
