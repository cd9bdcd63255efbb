use std::path::{Path, PathBuf};

use catalog_events::Event;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::NotifyError;
use crate::sink::LineSink;
use crate::subscriber::Subscriber;

pub const DEFAULT_RECOMMENDATIONS_FILE: &str = "recommendations.json";

const INTERACTION_ADD_FAVORITE: &str = "add_favorite";

/// One line of the recommendation feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    pub user_id: i64,
    pub interaction: String,
    pub product_id: i64,
    pub timestamp: DateTime<Utc>,
}

/// Feeds user/product interactions to the recommendation file.
///
/// Fails soft: a missing `user_id`/`product_id` or an I/O error is logged
/// and swallowed, and no line is written. `handle` always returns `Ok`.
#[derive(Debug)]
pub struct RecommendationSubscriber {
    sink: LineSink,
}

impl RecommendationSubscriber {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            sink: LineSink::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.sink.path()
    }

    fn record(&self, event: &Event) -> Result<(), NotifyError> {
        let entry = RecommendationEntry {
            user_id: required_field(event, "user_id")?,
            interaction: INTERACTION_ADD_FAVORITE.to_string(),
            product_id: required_field(event, "product_id")?,
            timestamp: event.timestamp(),
        };
        self.sink.append_json(&entry)
    }
}

impl Default for RecommendationSubscriber {
    fn default() -> Self {
        Self::new(DEFAULT_RECOMMENDATIONS_FILE)
    }
}

impl Subscriber for RecommendationSubscriber {
    fn handle(&self, event: &Event) -> Result<(), NotifyError> {
        match self.record(event) {
            Ok(()) => {
                debug!(kind = %event.kind(), "Recommendation interaction recorded");
            }
            Err(e) => {
                error!(
                    kind = %event.kind(),
                    path = %self.path().display(),
                    error = %e,
                    "Error updating recommendation system"
                );
            }
        }
        Ok(())
    }
}

/// Absent and non-integer ids are both reported as missing.
fn required_field(event: &Event, field: &'static str) -> Result<i64, NotifyError> {
    event
        .field(field)
        .and_then(|value| value.as_i64())
        .ok_or(NotifyError::MissingField {
            kind: event.kind(),
            field,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_events::EventKind;

    #[test]
    fn default_destination_is_recommendations_json() {
        assert_eq!(
            RecommendationSubscriber::default().path(),
            Path::new("recommendations.json")
        );
    }

    #[test]
    fn record_reports_missing_user_id() {
        let dir = tempfile::tempdir().unwrap();
        let subscriber = RecommendationSubscriber::new(dir.path().join("recs.json"));

        let err = subscriber
            .record(&Event::product_deleted(5, "Lamp"))
            .unwrap_err();

        assert!(matches!(
            err,
            NotifyError::MissingField {
                kind: EventKind::ProductDeleted,
                field: "user_id"
            }
        ));
    }

    #[test]
    fn record_writes_integer_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recs.json");
        let subscriber = RecommendationSubscriber::new(&path);

        subscriber.record(&Event::favorite_added(12, 34)).unwrap();

        let line = std::fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(json["user_id"], serde_json::json!(12));
        assert_eq!(json["product_id"], serde_json::json!(34));
        assert_eq!(json["interaction"], "add_favorite");
    }
}
