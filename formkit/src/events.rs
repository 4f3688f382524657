//! Event results, the control input trait and change notifications.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use log::trace;

use crate::keybinds::KeyCombo;

// =============================================================================
// Event Result
// =============================================================================

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// Input handling for interactive controls.
///
/// Coordinates passed to [`on_click`](ControlEvents::on_click) are relative
/// to the area the control was last rendered into.
pub trait ControlEvents {
    fn on_key(&self, key: &KeyCombo) -> EventResult;

    fn on_click(&self, x: u16, y: u16) -> EventResult;
}

// =============================================================================
// Event Emitter
// =============================================================================

/// Handle returned by [`EventEmitter::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

impl SubscriptionId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Synchronous multicast emitter.
///
/// Listeners run on the emitting thread, in subscription order. The listener
/// list is snapshotted before dispatch, so a listener may subscribe or
/// unsubscribe without deadlocking.
pub struct EventEmitter<T> {
    listeners: Arc<RwLock<Vec<(SubscriptionId, Listener<T>)>>>,
}

impl<T> EventEmitter<T> {
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Register a listener.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        if let Ok(mut guard) = self.listeners.write() {
            guard.push((id, Arc::new(listener)));
        }
        id
    }

    /// Remove a listener. Returns false if it was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners
            .write()
            .map(|mut guard| {
                let before = guard.len();
                guard.retain(|(sub, _)| *sub != id);
                guard.len() != before
            })
            .unwrap_or(false)
    }

    /// Deliver `value` to every listener. Returns how many were called.
    pub fn emit(&self, value: &T) -> usize {
        let snapshot: Vec<Listener<T>> = self
            .listeners
            .read()
            .map(|guard| guard.iter().map(|(_, l)| Arc::clone(l)).collect())
            .unwrap_or_default();

        trace!("Emitting to {} listener(s)", snapshot.len());
        for listener in &snapshot {
            listener(value);
        }
        snapshot.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.read().map(|guard| guard.len()).unwrap_or(0)
    }
}

impl<T> Clone for EventEmitter<T> {
    fn clone(&self) -> Self {
        Self {
            listeners: Arc::clone(&self.listeners),
        }
    }
}

impl<T> Default for EventEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EventEmitter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn emits_in_subscription_order() {
        let emitter = EventEmitter::<i32>::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let first = Arc::clone(&seen);
        emitter.subscribe(move |v| first.lock().unwrap().push(("first", *v)));
        let second = Arc::clone(&seen);
        emitter.subscribe(move |v| second.lock().unwrap().push(("second", *v)));

        assert_eq!(emitter.emit(&7), 2);
        assert_eq!(*seen.lock().unwrap(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let emitter = EventEmitter::<()>::new();
        let id = emitter.subscribe(|_| {});
        assert!(emitter.unsubscribe(id));
        assert!(!emitter.unsubscribe(id));
        assert_eq!(emitter.emit(&()), 0);
    }

    #[test]
    fn clones_share_listeners() {
        let emitter = EventEmitter::<u8>::new();
        let clone = emitter.clone();
        clone.subscribe(|_| {});
        assert_eq!(emitter.listener_count(), 1);
    }
}
