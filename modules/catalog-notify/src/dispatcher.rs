//! The dispatch registry.

use std::collections::HashMap;
use std::sync::Arc;

use catalog_events::Event;
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::error::NotifyError;
use crate::subscriber::Subscriber;

type Registry = HashMap<String, Vec<Arc<dyn Subscriber>>>;

/// Maps an event kind to the ordered list of subscribers registered for it.
///
/// Build one per process and share it as `Arc<Dispatcher>` with every
/// producer and subscription site. All methods take `&self`; the registry is
/// guarded by a lock that is never held while a subscriber runs.
#[derive(Default)]
pub struct Dispatcher {
    registry: RwLock<Registry>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `subscriber` at the end of `kind`'s list.
    ///
    /// Registering the same subscriber twice under one kind is allowed and
    /// makes it run twice per emit.
    pub fn subscribe(&self, kind: impl Into<String>, subscriber: Arc<dyn Subscriber>) {
        let kind = kind.into();
        debug!(kind = %kind, subscriber = subscriber.name(), "Subscribing");
        self.registry.write().entry(kind).or_default().push(subscriber);
    }

    /// Remove the first registration of this exact subscriber (by identity,
    /// not by value) under `kind`. Returns whether anything was removed; an
    /// absent kind or subscriber is a no-op.
    pub fn unsubscribe<S>(&self, kind: &str, subscriber: &Arc<S>) -> bool
    where
        S: Subscriber + ?Sized,
    {
        let target = Arc::as_ptr(subscriber).cast::<()>();
        let mut registry = self.registry.write();

        let Some(list) = registry.get_mut(kind) else {
            return false;
        };
        let Some(index) = list
            .iter()
            .position(|s| Arc::as_ptr(s).cast::<()>() == target)
        else {
            return false;
        };

        list.remove(index);
        if list.is_empty() {
            registry.remove(kind);
        }
        debug!(kind, "Unsubscribed");
        true
    }

    /// Deliver `event` to every subscriber of its kind, in registration
    /// order, on the calling thread.
    ///
    /// The subscriber list is snapshotted before the first handler runs, so
    /// handlers may subscribe or unsubscribe without deadlocking; such
    /// changes apply from the next emit. The first handler error stops the
    /// emit and is returned; later subscribers do not run.
    pub fn emit(&self, event: &Event) -> Result<(), NotifyError> {
        let kind = event.kind();
        let subscribers = match self.registry.read().get(kind.as_str()) {
            Some(list) => list.clone(),
            None => return Ok(()),
        };

        debug!(kind = %kind, subscribers = subscribers.len(), "Emitting event");

        for (position, subscriber) in subscribers.iter().enumerate() {
            if let Err(e) = subscriber.handle(event) {
                warn!(
                    kind = %kind,
                    subscriber = subscriber.name(),
                    position,
                    skipped = subscribers.len() - position - 1,
                    error = %e,
                    "Subscriber failed, aborting emit"
                );
                return Err(e);
            }
        }

        Ok(())
    }

    /// Drop every registration.
    pub fn reset(&self) {
        self.registry.write().clear();
    }

    pub fn subscriber_count(&self, kind: &str) -> usize {
        self.registry.read().get(kind).map_or(0, Vec::len)
    }

    /// Kinds that currently have at least one subscriber, sorted.
    pub fn kinds(&self) -> Vec<String> {
        let mut kinds: Vec<String> = self.registry.read().keys().cloned().collect();
        kinds.sort();
        kinds
    }

    pub fn is_empty(&self) -> bool {
        self.registry.read().is_empty()
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registry = self.registry.read();
        let mut map = f.debug_map();
        for (kind, list) in registry.iter() {
            map.entry(kind, &list.len());
        }
        map.finish()
    }
}
