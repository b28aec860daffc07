//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::charset::Charset;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8888;

/// Default request body limit (16 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Root configuration for the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Interface to bind (e.g., "0.0.0.0" for all interfaces).
    pub host: String,

    /// TCP port to listen on.
    pub port: u16,

    /// Charset that dumped headers and bodies are rendered in.
    pub charset: Charset,

    /// Largest request body the handler will read.
    pub max_body_bytes: usize,

    /// TLS settings.
    pub tls: TlsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            charset: Charset::Utf8,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            tls: TlsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Socket address the listener binds to.
    ///
    /// Returns `None` if `host` is not an IP address; validated configs
    /// always produce an address.
    pub fn bind_address(&self) -> Option<SocketAddr> {
        let ip: IpAddr = self.host.parse().ok()?;
        Some(SocketAddr::new(ip, self.port))
    }
}

/// TLS configuration for the listener.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TlsConfig {
    /// Serve HTTPS instead of plain HTTP.
    pub enabled: bool,

    /// Path to certificate file (PEM).
    pub cert_path: PathBuf,

    /// Path to private key file (PEM).
    pub key_path: PathBuf,
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            cert_path: PathBuf::from("cert.pem"),
            key_path: PathBuf::from("key.pem"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8888);
        assert_eq!(config.charset, Charset::Utf8);
        assert!(!config.tls.enabled);
        assert_eq!(config.tls.cert_path, PathBuf::from("cert.pem"));
        assert_eq!(config.tls.key_path, PathBuf::from("key.pem"));
        assert_eq!(config.bind_address(), Some("0.0.0.0:8888".parse().unwrap()));
    }

    #[test]
    fn test_bind_address_requires_ip_host() {
        let mut config = ServerConfig::default();
        config.host = "::1".to_string();
        config.port = 9000;
        assert_eq!(config.bind_address(), Some("[::1]:9000".parse().unwrap()));

        config.host = "localhost".to_string();
        assert_eq!(config.bind_address(), None);
    }
}
