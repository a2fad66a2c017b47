//! Scoped pointer subscriptions.
//!
//! The shell reports every mouse-down and touch-start to a [`PointerHub`],
//! tagged with whether it landed inside the player widget. Interested parties
//! hold a [`PointerSubscription`]; dropping it removes the listener, so a
//! remounted card never sees events through a stale handler.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    MouseDown,
    TouchStart,
}

/// Where a pointer event landed relative to the player widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Player,
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub target: PointerTarget,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, target: PointerTarget) -> Self {
        Self { kind, target }
    }

    pub fn is_outside(&self) -> bool {
        self.target == PointerTarget::Outside
    }
}

type Listener = Arc<dyn Fn(&PointerEvent) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Fan-out point for pointer events.
#[derive(Clone, Default)]
pub struct PointerHub {
    inner: Arc<Mutex<Listeners>>,
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` until the returned guard is dropped.
    pub fn subscribe<F>(&self, listener: F) -> PointerSubscription
    where
        F: Fn(&PointerEvent) + Send + Sync + 'static,
    {
        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.entries.push((id, Arc::new(listener)));
        tracing::debug!("Pointer listener {} attached", id);

        PointerSubscription {
            id,
            hub: Arc::downgrade(&self.inner),
        }
    }

    /// Deliver `event` to every listener. Returns how many were called.
    pub fn dispatch(&self, event: &PointerEvent) -> usize {
        // Listeners run without the lock held so they may subscribe or drop
        let listeners: Vec<Listener> = self
            .inner
            .lock()
            .entries
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in &listeners {
            listener(event);
        }
        listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        self.inner.lock().entries.len()
    }
}

impl std::fmt::Debug for PointerHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Keeps a listener registered; removes it on drop.
#[must_use = "dropping the subscription detaches the listener"]
pub struct PointerSubscription {
    id: u64,
    hub: Weak<Mutex<Listeners>>,
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade() {
            hub.lock().entries.retain(|(id, _)| *id != self.id);
            tracing::debug!("Pointer listener {} detached", self.id);
        }
    }
}

impl std::fmt::Debug for PointerSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerSubscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn outside() -> PointerEvent {
        PointerEvent::new(PointerKind::MouseDown, PointerTarget::Outside)
    }

    #[test]
    fn test_dispatch_reaches_subscribers() {
        let hub = PointerHub::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let h = hits.clone();
        let _sub = hub.subscribe(move |event| {
            if event.is_outside() {
                h.fetch_add(1, Ordering::SeqCst);
            }
        });

        assert_eq!(hub.dispatch(&outside()), 1);
        hub.dispatch(&PointerEvent::new(PointerKind::TouchStart, PointerTarget::Player));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_releases_listener() {
        let hub = PointerHub::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let h = hits.clone();
        let sub = hub.subscribe(move |_| {
            h.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(hub.listener_count(), 1);

        drop(sub);
        assert_eq!(hub.listener_count(), 0);
        assert_eq!(hub.dispatch(&outside()), 0);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_subscription_outlives_hub() {
        let hub = PointerHub::new();
        let sub = hub.subscribe(|_| {});
        drop(hub);
        // Must not panic
        drop(sub);
    }

    #[test]
    fn test_independent_subscriptions() {
        let hub = PointerHub::new();
        let first = hub.subscribe(|_| {});
        let _second = hub.subscribe(|_| {});
        drop(first);
        assert_eq!(hub.listener_count(), 1);
    }
}
