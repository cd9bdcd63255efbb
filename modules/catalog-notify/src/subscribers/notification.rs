use catalog_events::{Event, EventPayload};

use crate::error::NotifyError;
use crate::strategy::NotificationStrategy;
use crate::subscriber::Subscriber;

/// Sends a one-line summary of each event to a fixed recipient.
///
/// Strategy failures propagate.
pub struct NotificationSubscriber<S> {
    recipient: String,
    strategy: S,
}

impl<S: NotificationStrategy> NotificationSubscriber<S> {
    pub fn new(recipient: impl Into<String>, strategy: S) -> Self {
        Self {
            recipient: recipient.into(),
            strategy,
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }
}

impl<S: NotificationStrategy> Subscriber for NotificationSubscriber<S> {
    fn handle(&self, event: &Event) -> Result<(), NotifyError> {
        self.strategy.send(&self.recipient, &summarize(event))
    }
}

/// Human-readable one-liner for an event.
pub fn summarize(event: &Event) -> String {
    match event.payload() {
        EventPayload::FavoriteAdded(p) => {
            format!("user {} added product {} to favorites", p.user_id, p.product_id)
        }
        EventPayload::ProductCreated(p) => format!(
            "product {} \"{}\" created in {} at {:.2}",
            p.product_id(),
            p.product_name(),
            p.category(),
            p.price()
        ),
        EventPayload::ProductPriceChanged(p) => format!(
            "product {} price changed from {:.2} to {:.2} ({:+.1}%)",
            p.product_id(),
            p.old_price(),
            p.new_price(),
            p.change_percentage()
        ),
        EventPayload::ProductDeleted(p) => {
            format!("product {} \"{}\" deleted", p.product_id, p.product_name)
        }
    }
}
