//! The event envelope and its kind tag.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::EventError;
use crate::payload::{
    EventPayload, FavoriteAdded, ProductCreated, ProductDeleted, ProductPriceChanged,
};

// ---------------------------------------------------------------------------
// EventKind
// ---------------------------------------------------------------------------

/// Stable routing tag for an event. Subscriptions are keyed by its string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    FavoriteAdded,
    ProductCreated,
    ProductPriceChanged,
    ProductDeleted,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::FavoriteAdded,
        EventKind::ProductCreated,
        EventKind::ProductPriceChanged,
        EventKind::ProductDeleted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::FavoriteAdded => "FavoriteAdded",
            EventKind::ProductCreated => "ProductCreated",
            EventKind::ProductPriceChanged => "ProductPriceChanged",
            EventKind::ProductDeleted => "ProductDeleted",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| EventError::UnknownKind(s.to_string()))
    }
}

impl From<EventKind> for String {
    fn from(kind: EventKind) -> Self {
        kind.as_str().to_string()
    }
}

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// A fact that has occurred. Immutable once constructed: there are no
/// setters, and the kind is always derived from the payload variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    timestamp: DateTime<Utc>,
    payload: EventPayload,
}

impl Event {
    /// Wrap a payload, stamping the current wall-clock time.
    pub fn new(payload: impl Into<EventPayload>) -> Self {
        Self {
            timestamp: Utc::now(),
            payload: payload.into(),
        }
    }

    pub(crate) fn with_timestamp(payload: EventPayload, timestamp: DateTime<Utc>) -> Self {
        Self { timestamp, payload }
    }

    pub fn favorite_added(user_id: i64, product_id: i64) -> Self {
        Self::new(FavoriteAdded {
            user_id,
            product_id,
        })
    }

    /// Fails on a non-finite price.
    pub fn product_created(
        product_id: i64,
        product_name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Result<Self, EventError> {
        Ok(Self::new(ProductCreated::new(
            product_id,
            product_name,
            category,
            price,
        )?))
    }

    /// Fails on a zero or non-finite price; the event is never created.
    pub fn product_price_changed(
        product_id: i64,
        old_price: f64,
        new_price: f64,
    ) -> Result<Self, EventError> {
        Ok(Self::new(ProductPriceChanged::new(
            product_id, old_price, new_price,
        )?))
    }

    pub fn product_deleted(product_id: i64, product_name: impl Into<String>) -> Self {
        Self::new(ProductDeleted {
            product_id,
            product_name: product_name.into(),
        })
    }

    pub fn kind(&self) -> EventKind {
        match &self.payload {
            EventPayload::FavoriteAdded(_) => EventKind::FavoriteAdded,
            EventPayload::ProductCreated(_) => EventKind::ProductCreated,
            EventPayload::ProductPriceChanged(_) => EventKind::ProductPriceChanged,
            EventPayload::ProductDeleted(_) => EventKind::ProductDeleted,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn payload(&self) -> &EventPayload {
        &self.payload
    }

    /// The payload as a flat JSON object (field name → value).
    pub fn data(&self) -> Value {
        serde_json::to_value(&self.payload).unwrap_or(Value::Null)
    }

    /// Look up a single payload field by name.
    pub fn field(&self, name: &str) -> Option<Value> {
        match self.data() {
            Value::Object(mut fields) => fields.remove(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_follows_payload_variant() {
        assert_eq!(Event::favorite_added(1, 2).kind(), EventKind::FavoriteAdded);
        assert_eq!(
            Event::product_created(1, "Lamp", "Home", 20.0)
                .unwrap()
                .kind(),
            EventKind::ProductCreated
        );
        assert_eq!(
            Event::product_price_changed(1, 10.0, 12.0).unwrap().kind(),
            EventKind::ProductPriceChanged
        );
        assert_eq!(Event::product_deleted(1, "Lamp").kind(), EventKind::ProductDeleted);
    }

    #[test]
    fn kind_parses_from_its_tag() {
        for kind in EventKind::ALL {
            assert_eq!(kind.as_str().parse::<EventKind>().unwrap(), kind);
        }
        assert!(matches!(
            "FavoriteAddedEvent".parse::<EventKind>(),
            Err(EventError::UnknownKind(_))
        ));
    }

    #[test]
    fn all_kind_tags_are_unique() {
        let tags: std::collections::HashSet<&str> =
            EventKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(tags.len(), EventKind::ALL.len());
    }

    #[test]
    fn timestamp_is_taken_at_construction() {
        let before = Utc::now();
        let event = Event::favorite_added(1, 2);
        let after = Utc::now();

        assert!(event.timestamp() >= before);
        assert!(event.timestamp() <= after);
    }

    #[test]
    fn data_exposes_payload_fields() {
        let event = Event::product_created(9, "Desk", "Office", 150.5).unwrap();
        assert_eq!(
            event.data(),
            json!({
                "product_id": 9,
                "product_name": "Desk",
                "category": "Office",
                "price": 150.5
            })
        );
        assert_eq!(event.field("category"), Some(json!("Office")));
        assert_eq!(event.field("user_id"), None);
    }

    #[test]
    fn price_changed_stores_percentage() {
        let event = Event::product_price_changed(4, 50.0, 75.0).unwrap();
        assert_eq!(event.field("change_percentage"), Some(json!(50.0)));
    }

    #[test]
    fn price_changed_from_zero_never_builds_event() {
        let result = Event::product_price_changed(4, 0.0, 75.0);
        assert!(matches!(result, Err(EventError::ZeroBasePrice { product_id: 4 })));
    }
}
