//! Built-in subscribers.

mod audit_log;
mod console;
mod notification;
mod recommendation;

pub use audit_log::{AuditLogSubscriber, DEFAULT_AUDIT_LOG};
pub use console::ConsoleSubscriber;
pub use notification::{summarize, NotificationSubscriber};
pub use recommendation::{
    RecommendationEntry, RecommendationSubscriber, DEFAULT_RECOMMENDATIONS_FILE,
};
