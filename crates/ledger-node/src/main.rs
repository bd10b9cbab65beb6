//! # Settlement-Chain Demo Node
//!
//! Single-process node that wires every component together and runs a
//! deterministic end-to-end flow:
//!
//! 1. Bootstrap the role registry and grant business roles
//! 2. Settle an invoice (create, finance, ship, pay)
//! 3. Round-trip a bridge transfer (lock, quorum release)
//! 4. Relay one inbound cross-ledger message
//!
//! Emitted events are printed as JSON at the end, the same records an
//! off-chain indexer would consume.

mod node;

use anyhow::{Context, Result};
use ledger_telemetry::{init_telemetry, TelemetryConfig};
use node::DemoLedger;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

fn main() -> Result<()> {
    let config = TelemetryConfig::for_service("ledger-node");
    let _guard = init_telemetry(&config).context("initializing telemetry")?;

    info!("===========================================");
    info!("  Settlement-Chain Demo Node v{}", env!("CARGO_PKG_VERSION"));
    info!("===========================================");

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock before epoch")?
        .as_secs();

    let mut ledger = DemoLedger::bootstrap().context("bootstrapping ledger")?;
    let events = ledger.run_demo_flow(now).context("running demo flow")?;

    info!(count = events.len(), "emitted events:");
    println!("{}", serde_json::to_string_pretty(&events)?);

    Ok(())
}
