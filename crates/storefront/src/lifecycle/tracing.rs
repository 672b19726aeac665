//! # Observability & Tracing
//!
//! Structured logging for the whole backend via `tracing`.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started` / `Shutdown` per table with its final row count
//! - **Table Requests**: every insert, get, select, update and delete at `debug`
//! - **Domain Operations**: client methods carry `#[instrument]` spans with their ids
//! - **Submissions**: rejected attempts at `debug`, store failures and dropped selections
//!   at `warn`, stored orders at `info`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default level comes from `log_level`)
//! cargo run
//!
//! # Full payloads, including the order record sent to the store
//! RUST_LOG=debug cargo run
//!
//! # Only the table engine
//! RUST_LOG=table_actor=debug cargo run
//! ```

use crate::config::StorefrontConfig;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` wins over the configured `log_level`.
pub fn setup_tracing(config: &StorefrontConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
