//! TLS configuration and certificate loading.

use std::path::{Path, PathBuf};

use axum_server::tls_rustls::RustlsConfig;
use thiserror::Error;

/// Failure to prepare the TLS listener.
#[derive(Debug, Error)]
pub enum TlsError {
    #[error("certificate file not found: {0:?}")]
    CertificateNotFound(PathBuf),

    #[error("private key file not found: {0:?}")]
    KeyNotFound(PathBuf),

    #[error("failed to load certificate {cert:?} / key {key:?}: {source}")]
    Load {
        cert: PathBuf,
        key: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Load TLS configuration from certificate and key files.
pub async fn load_tls_config(
    cert_path: &Path,
    key_path: &Path,
) -> Result<RustlsConfig, TlsError> {
    if !cert_path.exists() {
        return Err(TlsError::CertificateNotFound(cert_path.to_path_buf()));
    }
    if !key_path.exists() {
        return Err(TlsError::KeyNotFound(key_path.to_path_buf()));
    }

    // More than one rustls provider may be linked in; the process default must be set
    // before a server config is built. An already installed provider is kept.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    RustlsConfig::from_pem_file(cert_path, key_path)
        .await
        .map_err(|source| TlsError::Load {
            cert: cert_path.to_path_buf(),
            key: key_path.to_path_buf(),
            source,
        })
}
