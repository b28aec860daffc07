//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum setup, trace layer)
//!     → handler.rs (any method, any path)
//!         → request.rs (render headers, read body within limit)
//!         → charset conversion → dump sink
//!     → response.rs ({"message":"Status OK"} or a 4xx error body)
//!     → Send to client
//! ```

pub mod handler;
pub mod request;
pub mod response;
pub mod server;

pub use response::{HandlerError, StatusMessage, STATUS_OK};
pub use server::{AppState, HttpServer, ServerError};
