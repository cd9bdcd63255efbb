//! The subscriber capability.

use catalog_events::Event;

use crate::error::NotifyError;

/// Anything that reacts to an event.
///
/// `handle` runs synchronously on the emitting thread and must not block for
/// long. Returning `Err` aborts the rest of the emit, so subscribers whose
/// failures must not reach the producer absorb them and return `Ok(())`.
pub trait Subscriber: Send + Sync {
    fn handle(&self, event: &Event) -> Result<(), NotifyError>;

    /// Name used in logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
