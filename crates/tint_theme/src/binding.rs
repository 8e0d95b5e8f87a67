//! Per-element binding records

use smallvec::SmallVec;
use std::sync::{Arc, Weak};
use tint_core::{AttributeSlot, Element};

/// One `(resource key, attribute slot)` pair
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BindingRecord {
    resource_key: Arc<str>,
    slot: AttributeSlot,
}

impl BindingRecord {
    pub fn new(resource_key: impl Into<Arc<str>>, slot: AttributeSlot) -> Self {
        Self {
            resource_key: resource_key.into(),
            slot,
        }
    }

    pub fn resource_key(&self) -> &str {
        &self.resource_key
    }

    pub fn slot(&self) -> AttributeSlot {
        self.slot
    }
}

/// Outcome of [`SubscriberState::upsert`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindingChange {
    /// First binding for this slot
    Inserted,
    /// Slot was bound to a different key
    Replaced,
    /// Identical binding already present
    Unchanged,
}

/// Bindings declared on one element
///
/// At most one record per slot; records keep declaration order and a
/// replacement keeps the position of the record it replaces.
pub(crate) struct SubscriberState {
    element: Weak<dyn Element>,
    bindings: SmallVec<[BindingRecord; 4]>,
}

impl SubscriberState {
    pub(crate) fn new(element: Weak<dyn Element>) -> Self {
        Self {
            element,
            bindings: SmallVec::new(),
        }
    }

    pub(crate) fn upsert(&mut self, record: BindingRecord) -> BindingChange {
        match self.bindings.iter_mut().find(|existing| existing.slot == record.slot) {
            Some(existing) if existing.resource_key == record.resource_key => {
                BindingChange::Unchanged
            }
            Some(existing) => {
                *existing = record;
                BindingChange::Replaced
            }
            None => {
                self.bindings.push(record);
                BindingChange::Inserted
            }
        }
    }

    pub(crate) fn records(&self) -> &[BindingRecord] {
        &self.bindings
    }

    /// Whether the owning element has been dropped
    pub(crate) fn is_orphaned(&self) -> bool {
        self.element.strong_count() == 0
    }
}
