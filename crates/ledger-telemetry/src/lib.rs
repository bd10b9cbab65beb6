//! # Ledger Telemetry
//!
//! Structured logging setup for Settlement-Chain services.
//!
//! All services log through `tracing`; this crate wires the subscriber
//! (level filter, plain or JSON output) from environment variables so
//! the binaries stay free of logging boilerplate.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ledger_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     let _guard = init_telemetry(&config).expect("telemetry init");
//!     // logs flow from here on
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SC_SERVICE_NAME` | `settlement-chain` | Service name in log lines |
//! | `SC_LOG_LEVEL` | `info` | Level filter (also reads `RUST_LOG`) |
//! | `SC_LOG_JSON` | `false` | Emit JSON log lines |

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;

pub use config::TelemetryConfig;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Telemetry initialization errors.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured level filter did not parse.
    #[error("invalid log filter {filter:?}: {reason}")]
    InvalidFilter {
        /// The filter string that failed to parse.
        filter: String,
        /// Parser diagnostics.
        reason: String,
    },

    /// A global subscriber was already installed.
    #[error("subscriber already installed: {0}")]
    AlreadyInstalled(String),
}

/// Install the global `tracing` subscriber per `config`.
///
/// Returns a guard to hold for the lifetime of the process. Call once;
/// a second call reports [`TelemetryError::AlreadyInstalled`].
pub fn init_telemetry(config: &TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let filter =
        EnvFilter::try_new(&config.log_level).map_err(|e| TelemetryError::InvalidFilter {
            filter: config.log_level.clone(),
            reason: e.to_string(),
        })?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let install_result = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    install_result.map_err(|e| TelemetryError::AlreadyInstalled(e.to_string()))?;

    tracing::info!(service = %config.service_name, "telemetry initialized");
    Ok(TelemetryGuard { _private: () })
}

/// Guard that keeps telemetry active for the process lifetime.
pub struct TelemetryGuard {
    _private: (),
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!("shutting down telemetry");
    }
}
