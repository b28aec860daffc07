//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request handler:
//!     → dump.rs (converted header/body bytes, stdout)
//!
//! All subsystems:
//!     → logging.rs (structured tracing events, stderr)
//! ```
//!
//! # Design Decisions
//! - Dumps and diagnostics go to separate streams so the dump stays
//!   byte-exact even when it holds non-UTF-8 output
//! - Log level configurable via RUST_LOG

pub mod dump;
pub mod logging;

pub use dump::DumpSink;
