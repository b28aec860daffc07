//! charset-echo
//!
//! A diagnostic HTTP server that accepts any request, dumps its headers and
//! body (optionally transcoded to EUC-KR) and answers with a fixed JSON
//! acknowledgement.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request     ┌─────────┐    ┌──────────┐    ┌──────────┐
//!     ──────────────────▶│ net/tls │───▶│   http   │───▶│ charset  │
//!                        │(option) │    │ handler  │    │ convert  │
//!                        └─────────┘    └────┬─────┘    └────┬─────┘
//!                                            │               │
//!     Client Response                        │               ▼
//!     ◀──────── {"message":"Status OK"} ─────┘        ┌────────────┐
//!                                                     │ dump sink  │──▶ stdout
//!                                                     └────────────┘
//!     config (flags + TOML) ─▶ lifecycle (startup/shutdown)   tracing ─▶ stderr
//! ```

use clap::Parser;

use charset_echo::config::Cli;
use charset_echo::lifecycle::{self, shutdown_signal, Shutdown};
use charset_echo::observability::{logging, DumpSink};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = Cli::parse().into_config()?;

    tracing::info!("charset-echo v{} starting", env!("CARGO_PKG_VERSION"));

    let shutdown = Shutdown::new();
    let trigger = shutdown.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        trigger.trigger();
    });

    if let Err(e) = lifecycle::start(config, DumpSink::stdout(), &shutdown).await {
        tracing::error!(error = %e, "Server failed");
        return Err(e.into());
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
