//! Command-line flags.
//!
//! Flags left unset fall through to the config file (if any) and then to
//! the built-in defaults.

use std::path::PathBuf;

use clap::Parser;

use crate::charset::Charset;
use crate::config::loader::{read_config, ConfigError};
use crate::config::schema::ServerConfig;
use crate::config::validation::validate_config;

#[derive(Debug, Parser)]
#[command(name = "charset-echo")]
#[command(
    about = "Diagnostic HTTP server that dumps every request and answers 200",
    long_about = None
)]
pub struct Cli {
    /// Port to listen on [default: 8888]
    #[arg(short = 'p', long)]
    pub port: Option<u16>,

    /// Charset for dumped headers and bodies [default: utf8]
    #[arg(short = 'c', long, value_enum)]
    pub charset: Option<Charset>,

    /// Serve HTTPS using --cert and --key
    #[arg(long)]
    pub https: bool,

    /// Certificate file (PEM) [default: cert.pem]
    #[arg(long)]
    pub cert: Option<PathBuf>,

    /// Private key file (PEM) [default: key.pem]
    #[arg(long)]
    pub key: Option<PathBuf>,

    /// Interface to bind [default: 0.0.0.0]
    #[arg(long)]
    pub host: Option<String>,

    /// Largest request body accepted, in bytes [default: 16777216]
    #[arg(long)]
    pub max_body_bytes: Option<usize>,

    /// TOML config file; explicit flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Resolve flags, config file and defaults into a validated config.
    pub fn into_config(self) -> Result<ServerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => ServerConfig::default(),
        };

        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(charset) = self.charset {
            config.charset = charset;
        }
        if self.https {
            config.tls.enabled = true;
        }
        if let Some(cert) = self.cert {
            config.tls.cert_path = cert;
        }
        if let Some(key) = self.key {
            config.tls.key_path = key;
        }
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(max_body_bytes) = self.max_body_bytes {
            config.max_body_bytes = max_body_bytes;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}
