//! In-process event notification.
//!
//! Producers hand typed events to a [`Dispatcher`]; the dispatcher fans them
//! out, in registration order and on the caller's thread, to every
//! [`Subscriber`] registered for the event's kind.
//!
//! Each subscriber owns its failure policy. The audit log fails loud (its
//! I/O errors abort the emit), the recommendation feed fails soft (errors
//! are reported and absorbed).

pub mod dispatcher;
pub mod error;
pub mod sink;
pub mod strategy;
pub mod subscriber;
pub mod subscribers;

pub use dispatcher::Dispatcher;
pub use error::NotifyError;
pub use sink::{ConsoleSink, LineSink};
pub use strategy::{ConsoleStrategy, FileStrategy, NotificationStrategy};
pub use subscriber::Subscriber;
pub use subscribers::{
    AuditLogSubscriber, ConsoleSubscriber, NotificationSubscriber, RecommendationEntry,
    RecommendationSubscriber,
};
