//! Diagnostic HTTP dump server library.

pub mod charset;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use charset::{convert, Charset};
pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use observability::DumpSink;
