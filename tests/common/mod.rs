//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::io::{self, Write};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use charset_echo::{Charset, DumpSink, ServerConfig};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// In-memory dump destination shared with a `DumpSink`.
#[derive(Clone, Default)]
pub struct CapturedDump(Arc<Mutex<Vec<u8>>>);

impl Write for CapturedDump {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl CapturedDump {
    pub fn bytes(&self) -> Vec<u8> {
        self.0.lock().unwrap().clone()
    }

    /// Dumped lines without their trailing newline.
    pub fn lines(&self) -> Vec<Vec<u8>> {
        let bytes = self.bytes();
        bytes
            .split(|b| *b == b'\n')
            .filter(|line| !line.is_empty())
            .map(<[u8]>::to_vec)
            .collect()
    }
}

/// A dump sink plus a handle for reading what it received.
pub fn capture() -> (DumpSink, CapturedDump) {
    let captured = CapturedDump::default();
    (DumpSink::new(captured.clone()), captured)
}

/// Loopback config with the given charset.
pub fn config(charset: Charset) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        charset,
        ..ServerConfig::default()
    }
}

/// `label` followed by a space and `payload`, as written by the dump sink.
pub fn dump_line(label: &str, payload: &[u8]) -> Vec<u8> {
    let mut line = format!("{} ", label).into_bytes();
    line.extend_from_slice(payload);
    line
}

/// Reserve a loopback port that is free at the time of the call.
pub async fn free_port() -> u16 {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap().port()
}

/// Connect, retrying while the server is still starting up.
pub async fn connect(addr: SocketAddr) -> TcpStream {
    for _ in 0..100 {
        if let Ok(stream) = TcpStream::connect(addr).await {
            return stream;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("server at {} never accepted a connection", addr);
}

/// Send a raw HTTP/1.1 request and read the response until the server
/// closes the connection.
pub async fn send_raw(addr: SocketAddr, request: &str) -> String {
    let mut stream = connect(addr).await;
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = Vec::new();
    tokio::time::timeout(Duration::from_secs(5), stream.read_to_end(&mut response))
        .await
        .expect("response timed out")
        .unwrap();
    String::from_utf8(response).unwrap()
}
