//! Set of elements currently eligible for theme updates

use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, Weak};
use tint_core::{Element, ElementId};

/// Concurrency-safe set of active, bound elements
///
/// Membership is weak: the registry never keeps an element alive, and entries
/// whose element has been dropped disappear on the next [`snapshot`].
///
/// [`snapshot`]: SubscriberRegistry::snapshot
#[derive(Default)]
pub struct SubscriberRegistry {
    members: Mutex<FxHashMap<ElementId, Weak<dyn Element>>>,
}

impl SubscriberRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `element`; returns `false` if it was already a member
    pub fn insert(&self, element: &Arc<dyn Element>) -> bool {
        let mut members = self.members.lock().unwrap();
        let id = element.id();
        match members.get(&id) {
            Some(existing) if existing.strong_count() > 0 => false,
            _ => {
                members.insert(id, Arc::downgrade(element));
                true
            }
        }
    }

    /// Remove `id`; returns `false` if it was not a member
    pub fn remove(&self, id: ElementId) -> bool {
        self.members.lock().unwrap().remove(&id).is_some()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.members.lock().unwrap().contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.members.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget members whose element has been dropped; returns how many
    pub fn prune(&self) -> usize {
        let mut members = self.members.lock().unwrap();
        let before = members.len();
        members.retain(|_, weak| weak.strong_count() > 0);
        before - members.len()
    }

    /// Live members at this instant, pruning dropped elements
    ///
    /// The returned order is unspecified.
    pub fn snapshot(&self) -> Vec<Arc<dyn Element>> {
        let mut members = self.members.lock().unwrap();
        let mut live = Vec::with_capacity(members.len());
        members.retain(|id, weak| match weak.upgrade() {
            Some(element) => {
                live.push(element);
                true
            }
            None => {
                tracing::trace!(%id, "pruning dropped element from registry");
                false
            }
        });
        live
    }
}

impl std::fmt::Debug for SubscriberRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriberRegistry")
            .field("members", &self.len())
            .finish()
    }
}
