//! Catalog domain events.
//!
//! Immutable facts about what happened in the catalog ("a favorite was
//! added", "a product's price changed"). Each event carries a fixed kind tag
//! derived from its payload variant, a construction timestamp, and a closed
//! set of payload fields.
//!
//! Events know nothing about who consumes them. See `catalog-notify` for the
//! dispatcher and subscribers.

pub mod error;
pub mod event;
pub mod payload;
pub mod record;

pub use error::EventError;
pub use event::{Event, EventKind};
pub use payload::{EventPayload, FavoriteAdded, ProductCreated, ProductDeleted, ProductPriceChanged};
pub use record::EventRecord;
