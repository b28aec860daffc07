//! Startup orchestration.
//!
//! # Responsibilities
//! - Log the resolved configuration
//! - Load TLS material when HTTPS is enabled
//! - Bind the listener and begin accepting traffic
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - TLS files are read before binding, so bad paths never leave a
//!   half-started listener behind

use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::http::{HttpServer, ServerError};
use crate::lifecycle::Shutdown;
use crate::net::load_tls_config;
use crate::observability::DumpSink;

/// Start serving according to `config` until `shutdown` is triggered.
pub async fn start(
    config: ServerConfig,
    sink: DumpSink,
    shutdown: &Shutdown,
) -> Result<(), ServerError> {
    tracing::info!(
        host = %config.host,
        port = config.port,
        charset = %config.charset,
        https = config.tls.enabled,
        cert = %config.tls.cert_path.display(),
        key = %config.tls.key_path.display(),
        max_body_bytes = config.max_body_bytes,
        "Configuration loaded"
    );

    let addr = config
        .bind_address()
        .ok_or_else(|| ServerError::InvalidBindAddress(config.host.clone()))?;

    if config.tls.enabled {
        let tls = load_tls_config(&config.tls.cert_path, &config.tls.key_path).await?;
        let server = HttpServer::new(config, sink);
        return server.run_tls(addr, tls, shutdown.notified()).await;
    }

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    HttpServer::new(config, sink)
        .run(listener, shutdown.notified())
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_logs_resolved_config() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let config = ServerConfig {
            host: "localhost".to_string(),
            port: 9999,
            ..ServerConfig::default()
        };
        let err = start(config, DumpSink::new(io::sink()), &Shutdown::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ServerError::InvalidBindAddress(_)));

        let logs = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("Configuration loaded"), "{}", logs);
        assert!(logs.contains("host=localhost"), "{}", logs);
        assert!(logs.contains("port=9999"), "{}", logs);
        assert!(logs.contains("charset=utf8"), "{}", logs);
    }
}
