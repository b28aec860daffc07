//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Startup with TLS enabled
//!     → tls.rs (check files, load PEM cert chain and key)
//!     → RustlsConfig handed to the HTTPS listener
//! ```
//!
//! # Design Decisions
//! - TLS material is loaded before binding, so bad paths fail startup
//!   before any connection is accepted

pub mod tls;

pub use tls::{load_tls_config, TlsError};
