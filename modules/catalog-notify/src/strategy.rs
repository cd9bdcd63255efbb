//! Delivery strategies for direct notifications to a recipient.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::NotifyError;
use crate::sink::{ConsoleSink, LineSink};

pub const DEFAULT_NOTIFICATIONS_FILE: &str = "notifications.log";

/// Sends a message to a recipient over some channel.
pub trait NotificationStrategy: Send + Sync {
    fn send(&self, recipient: &str, message: &str) -> Result<(), NotifyError>;
}

/// `[NOTIFICATION] To: {recipient} - {message}` on the console.
#[derive(Debug, Default)]
pub struct ConsoleStrategy {
    sink: ConsoleSink,
}

impl ConsoleStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sink(sink: ConsoleSink) -> Self {
        Self { sink }
    }
}

impl NotificationStrategy for ConsoleStrategy {
    fn send(&self, recipient: &str, message: &str) -> Result<(), NotifyError> {
        let line = format!("[NOTIFICATION] To: {recipient} - {message}\n");
        if let Err(e) = self.sink.write_block(&line) {
            warn!(recipient, error = %e, "Console notification failed");
        }
        Ok(())
    }
}

/// Appends `{recipient}: {message}` lines to a file.
#[derive(Debug)]
pub struct FileStrategy {
    sink: LineSink,
}

impl FileStrategy {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            sink: LineSink::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.sink.path()
    }
}

impl Default for FileStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATIONS_FILE)
    }
}

impl NotificationStrategy for FileStrategy {
    fn send(&self, recipient: &str, message: &str) -> Result<(), NotifyError> {
        self.sink.append_text(&format!("{recipient}: {message}"))
    }
}
