//! Byte-exact dump of request headers and bodies.
//!
//! Each dump is one line: `<label> <payload>\n`. The payload is written
//! verbatim, so an EUC-KR rendering reaches the terminal as EUC-KR bytes.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Shared line writer for request dumps.
///
/// Cloning is cheap; all clones write to the same destination. Lines are
/// written under a lock so concurrent requests never interleave within a
/// line.
#[derive(Clone)]
pub struct DumpSink {
    out: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl DumpSink {
    /// Wrap an arbitrary writer.
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            out: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Sink writing to the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Write one dump line and flush it.
    pub fn write_line(&self, label: &str, payload: &[u8]) -> io::Result<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| io::Error::other("dump sink lock poisoned"))?;
        out.write_all(label.as_bytes())?;
        out.write_all(b" ")?;
        out.write_all(payload)?;
        out.write_all(b"\n")?;
        out.flush()
    }
}

impl std::fmt::Debug for DumpSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DumpSink").finish_non_exhaustive()
    }
}
