use std::path::{Path, PathBuf};

use catalog_events::{EventError, EventKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{kind} event is missing required field `{field}`")]
    MissingField { kind: EventKind, field: &'static str },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Event(#[from] EventError),
}

impl NotifyError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        NotifyError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
