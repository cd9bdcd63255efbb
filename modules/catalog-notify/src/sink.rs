//! Output sinks shared by subscribers and notification strategies.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::Serialize;

use crate::error::NotifyError;

// ---------------------------------------------------------------------------
// LineSink: append-only line file
// ---------------------------------------------------------------------------

/// Append-only, line-delimited file.
///
/// Every line goes out in a single `write_all` on a file opened with
/// `O_APPEND`, under this sink's mutex, so concurrent appends through the
/// same sink never interleave. Existing lines are never rewritten and the
/// file is never truncated.
#[derive(Debug)]
pub struct LineSink {
    path: PathBuf,
    lock: Mutex<()>,
}

impl LineSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize `entry` as one JSON object and append it as a line.
    pub fn append_json<T: Serialize>(&self, entry: &T) -> Result<(), NotifyError> {
        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');
        self.write_line(&line)
    }

    /// Append `text` followed by a newline.
    pub fn append_text(&self, text: &str) -> Result<(), NotifyError> {
        let mut line = Vec::with_capacity(text.len() + 1);
        line.extend_from_slice(text.as_bytes());
        line.push(b'\n');
        self.write_line(&line)
    }

    fn write_line(&self, line: &[u8]) -> Result<(), NotifyError> {
        let _guard = self.lock.lock();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| NotifyError::io(&self.path, e))?;

        file.write_all(line)
            .map_err(|e| NotifyError::io(&self.path, e))
    }
}

// ---------------------------------------------------------------------------
// ConsoleSink: human-readable output, stdout by default
// ---------------------------------------------------------------------------

/// A console-like writer. Blocks are written whole under a mutex.
pub struct ConsoleSink {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        let out: Box<dyn Write + Send> = Box::new(writer);
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn write_block(&self, block: &str) -> io::Result<()> {
        let mut out = self.out.lock();
        out.write_all(block.as_bytes())?;
        out.flush()
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl std::fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleSink").finish_non_exhaustive()
    }
}
