use std::path::{Path, PathBuf};

use catalog_events::{Event, EventRecord};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::error::NotifyError;
use crate::sink::LineSink;
use crate::subscriber::Subscriber;

pub const DEFAULT_AUDIT_LOG: &str = "audit.log";

/// One audit line: `{logged_at, event_type, timestamp, data}`.
#[derive(Serialize)]
struct AuditEntry {
    logged_at: DateTime<Utc>,
    #[serde(flatten)]
    record: EventRecord,
}

/// Appends every event it sees to a JSON-lines audit file.
///
/// Fails loud: an I/O error is returned from `handle`, which aborts the
/// emit and reaches the producer.
#[derive(Debug)]
pub struct AuditLogSubscriber {
    sink: LineSink,
}

impl AuditLogSubscriber {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            sink: LineSink::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.sink.path()
    }
}

impl Default for AuditLogSubscriber {
    fn default() -> Self {
        Self::new(DEFAULT_AUDIT_LOG)
    }
}

impl Subscriber for AuditLogSubscriber {
    fn handle(&self, event: &Event) -> Result<(), NotifyError> {
        let entry = AuditEntry {
            logged_at: Utc::now(),
            record: event.to_record(),
        };
        self.sink.append_json(&entry)?;

        debug!(kind = %event.kind(), path = %self.path().display(), "Audit entry written");
        Ok(())
    }
}
