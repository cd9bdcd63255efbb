//! Serialized form of an event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EventError;
use crate::event::{Event, EventKind};
use crate::payload::EventPayload;

/// `{event_type, timestamp, data}`: exactly the kind tag, the construction
/// time (RFC 3339) and the payload fields. Nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "event_type")]
    pub kind: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "data")]
    pub payload: serde_json::Value,
}

impl Event {
    pub fn to_record(&self) -> EventRecord {
        EventRecord {
            kind: self.kind().as_str().to_string(),
            timestamp: self.timestamp(),
            payload: self.data(),
        }
    }

    /// Rebuild an event from its record, decoding the payload by kind.
    pub fn from_record(record: &EventRecord) -> Result<Self, EventError> {
        let data = record.payload.clone();
        let payload = match record.kind.parse::<EventKind>()? {
            EventKind::FavoriteAdded => EventPayload::FavoriteAdded(serde_json::from_value(data)?),
            EventKind::ProductCreated => {
                EventPayload::ProductCreated(serde_json::from_value(data)?)
            }
            EventKind::ProductPriceChanged => {
                EventPayload::ProductPriceChanged(serde_json::from_value(data)?)
            }
            EventKind::ProductDeleted => {
                EventPayload::ProductDeleted(serde_json::from_value(data)?)
            }
        };

        Ok(Event::with_timestamp(payload, record.timestamp))
    }
}

impl From<&Event> for EventRecord {
    fn from(event: &Event) -> Self {
        event.to_record()
    }
}

impl TryFrom<&EventRecord> for Event {
    type Error = EventError;

    fn try_from(record: &EventRecord) -> Result<Self, Self::Error> {
        Event::from_record(record)
    }
}
