//! Subscription bus connecting the engine to its renderers.
//!
//! Listeners are called in registration order with the reaction that just
//! took the active slot, or `None` when the slot was cleared. A listener that
//! errors or panics is logged and skipped; the rest still get the event.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::core::error::AppResult;
use crate::core::reaction::Reaction;
use crate::util::serde::ListenerId;

/// Callback invoked on every active-slot change.
pub type Listener = Arc<dyn Fn(Option<&Reaction>) -> AppResult<()> + Send + Sync>;

struct BusInner {
    listeners: Mutex<Vec<(ListenerId, Listener)>>,
    next_id: AtomicU64,
}

impl BusInner {
    fn remove(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        listeners.len() != before
    }
}

/// Ordered collection of listeners, removable by identity.
#[derive(Clone)]
pub struct SubscriptionBus {
    inner: Arc<BusInner>,
}

impl SubscriptionBus {
    /// Empty bus.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(BusInner {
                listeners: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(1),
            }),
        }
    }

    /// Register `listener`. Dropping the returned handle does not unsubscribe.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Option<&Reaction>) -> AppResult<()> + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.listeners.lock().push((id, Arc::new(listener)));
        tracing::debug!("listener {} subscribed", id);
        Subscription {
            id,
            bus: Arc::downgrade(&self.inner),
        }
    }

    /// Remove the listener registered under `id`. Returns whether it was present.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.inner.remove(id)
    }

    /// Deliver `reaction` to every listener and return how many failed.
    pub fn notify(&self, reaction: Option<&Reaction>) -> usize {
        // Snapshot so listeners may (un)subscribe from inside the callback.
        let listeners: Vec<(ListenerId, Listener)> = self.inner.listeners.lock().clone();
        let mut failures = 0;
        for (id, listener) in listeners {
            match catch_unwind(AssertUnwindSafe(|| listener(reaction))) {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    failures += 1;
                    tracing::warn!("listener {} failed: {}", id, e);
                }
                Err(_) => {
                    failures += 1;
                    tracing::warn!("listener {} panicked", id);
                }
            }
        }
        failures
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.inner.listeners.lock().len()
    }

    /// Whether no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SubscriptionBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle for one registered listener.
#[derive(Debug)]
pub struct Subscription {
    id: ListenerId,
    bus: Weak<BusInner>,
}

impl Subscription {
    /// Identity of the listener.
    pub const fn id(&self) -> ListenerId {
        self.id
    }

    /// Remove exactly this listener. Returns `false` if it was already gone.
    pub fn unsubscribe(self) -> bool {
        self.bus.upgrade().is_some_and(|bus| bus.remove(self.id))
    }
}
