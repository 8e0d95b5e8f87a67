//! Element lifecycle notifications
//!
//! Elements raise three notifications that theme-aware code cares about:
//! becoming active (attached to a live tree), becoming inactive, and a change
//! of the element's requested light/dark appearance.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::sync::{Arc, RwLock};

/// Lifecycle notification kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// Element became active (mounted into a live tree)
    Activated,
    /// Element became inactive (unmounted)
    Deactivated,
    /// Element's requested appearance changed
    AppearanceChanged,
}

impl LifecycleEvent {
    pub const ALL: [LifecycleEvent; 3] = [
        LifecycleEvent::Activated,
        LifecycleEvent::Deactivated,
        LifecycleEvent::AppearanceChanged,
    ];
}

/// Lifecycle handler function type
pub type LifecycleHandler = Arc<dyn Fn() + Send + Sync>;

/// Per-element table of lifecycle handlers
///
/// Handlers are cloned out of the table before they run, so a handler may
/// register further handlers or re-enter the element without deadlocking.
#[derive(Default)]
pub struct LifecycleHandlers {
    handlers: RwLock<FxHashMap<LifecycleEvent, SmallVec<[LifecycleHandler; 2]>>>,
}

impl LifecycleHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for a lifecycle event
    pub fn register(&self, event: LifecycleEvent, handler: LifecycleHandler) {
        self.handlers
            .write()
            .unwrap()
            .entry(event)
            .or_default()
            .push(handler);
    }

    /// Number of handlers registered for `event`
    pub fn count(&self, event: LifecycleEvent) -> usize {
        self.handlers
            .read()
            .unwrap()
            .get(&event)
            .map_or(0, |handlers| handlers.len())
    }

    /// Invoke every handler registered for `event`, in registration order
    pub fn dispatch(&self, event: LifecycleEvent) {
        let handlers = match self.handlers.read().unwrap().get(&event) {
            Some(handlers) => handlers.clone(),
            None => return,
        };
        tracing::trace!(?event, count = handlers.len(), "dispatching lifecycle event");
        for handler in handlers {
            handler();
        }
    }
}

impl std::fmt::Debug for LifecycleHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for event in LifecycleEvent::ALL {
            map.entry(&event, &self.count(event));
        }
        map.finish()
    }
}
