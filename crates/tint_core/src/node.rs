//! Reference retained-mode element
//!
//! `Node` is the minimal element a host needs to take part in theme binding:
//! an attribute map, an active flag, a requested appearance and a lifecycle
//! handler table. Hosts with their own element types implement [`Element`]
//! directly instead.

use crate::dispatch::Dispatcher;
use crate::element::{Appearance, DisplayId, Element, ElementId};
use crate::events::{LifecycleEvent, LifecycleHandler, LifecycleHandlers};
use crate::value::{AttributeSlot, ResourceValue};
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};

pub struct Node {
    id: ElementId,
    display: DisplayId,
    active: AtomicBool,
    appearance: RwLock<Appearance>,
    attributes: Mutex<FxHashMap<AttributeSlot, ResourceValue>>,
    /// Total `set_attribute` calls, including re-applications of equal values
    writes: AtomicUsize,
    handlers: LifecycleHandlers,
    dispatcher: Arc<dyn Dispatcher>,
}

impl Node {
    /// Create an inactive node on the primary display
    pub fn new(dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self {
            id: ElementId::next(),
            display: DisplayId::PRIMARY,
            active: AtomicBool::new(false),
            appearance: RwLock::new(Appearance::Default),
            attributes: Mutex::new(FxHashMap::default()),
            writes: AtomicUsize::new(0),
            handlers: LifecycleHandlers::new(),
            dispatcher,
        }
    }

    pub fn with_display(mut self, display: DisplayId) -> Self {
        self.display = display;
        self
    }

    pub fn with_appearance(self, appearance: Appearance) -> Self {
        *self.appearance.write().unwrap() = appearance;
        self
    }

    /// Mark the node active and notify `Activated` handlers on a transition
    pub fn activate(&self) {
        if !self.active.swap(true, Ordering::SeqCst) {
            tracing::trace!(id = %self.id, "node activated");
            self.handlers.dispatch(LifecycleEvent::Activated);
        }
    }

    /// Mark the node inactive and notify `Deactivated` handlers on a transition
    pub fn deactivate(&self) {
        if self.active.swap(false, Ordering::SeqCst) {
            tracing::trace!(id = %self.id, "node deactivated");
            self.handlers.dispatch(LifecycleEvent::Deactivated);
        }
    }

    /// Change the requested appearance, notifying handlers when it differs
    pub fn set_requested_appearance(&self, appearance: Appearance) {
        {
            let mut current = self.appearance.write().unwrap();
            if *current == appearance {
                return;
            }
            *current = appearance;
        }
        self.handlers.dispatch(LifecycleEvent::AppearanceChanged);
    }

    /// Current value of `slot`, if set
    pub fn attribute(&self, slot: AttributeSlot) -> Option<ResourceValue> {
        self.attributes.lock().unwrap().get(&slot).cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn handler_count(&self, event: LifecycleEvent) -> usize {
        self.handlers.count(event)
    }
}

impl Element for Node {
    fn id(&self) -> ElementId {
        self.id
    }

    fn display(&self) -> DisplayId {
        self.display
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    fn requested_appearance(&self) -> Appearance {
        *self.appearance.read().unwrap()
    }

    fn set_attribute(&self, slot: AttributeSlot, value: ResourceValue) {
        debug_assert!(
            self.dispatcher.has_thread_access(),
            "{} mutated off its affinity thread",
            self.id
        );
        self.attributes.lock().unwrap().insert(slot, value);
        self.writes.fetch_add(1, Ordering::SeqCst);
    }

    fn clear_attribute(&self, slot: AttributeSlot) {
        debug_assert!(
            self.dispatcher.has_thread_access(),
            "{} mutated off its affinity thread",
            self.id
        );
        self.attributes.lock().unwrap().remove(&slot);
    }

    fn dispatcher(&self) -> Arc<dyn Dispatcher> {
        self.dispatcher.clone()
    }

    fn subscribe(&self, event: LifecycleEvent, handler: LifecycleHandler) {
        self.handlers.register(event, handler);
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("display", &self.display)
            .field("active", &self.is_active())
            .field("appearance", &self.requested_appearance())
            .field("handlers", &self.handlers)
            .finish_non_exhaustive()
    }
}
