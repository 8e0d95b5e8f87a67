//! The element contract consumed by theme bindings

use crate::dispatch::Dispatcher;
use crate::events::{LifecycleEvent, LifecycleHandler};
use crate::value::{AttributeSlot, ResourceValue};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Stable identity of an element for the lifetime of the process
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

impl ElementId {
    /// Allocate a fresh, never reused id
    pub fn next() -> Self {
        Self(NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element#{}", self.0)
    }
}

/// Display (monitor / window surface) an element is presented on
///
/// High-contrast mode is a per-display setting on some platforms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DisplayId(pub u32);

impl DisplayId {
    pub const PRIMARY: DisplayId = DisplayId(0);
}

/// Light/dark appearance an element asks for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Appearance {
    /// Follow the application default (dark)
    #[default]
    Default,
    Light,
    Dark,
}

impl Appearance {
    /// Toggle between light and dark; `Default` toggles to `Light`
    pub fn toggle(self) -> Self {
        match self {
            Appearance::Light => Appearance::Dark,
            Appearance::Dark | Appearance::Default => Appearance::Light,
        }
    }

    pub fn is_light(self) -> bool {
        self == Appearance::Light
    }
}

/// A retained-mode scene-graph element that theme bindings can drive
///
/// Attribute mutation (`set_attribute` / `clear_attribute`) must only happen
/// on a thread for which [`Element::dispatcher`] reports access.
pub trait Element: Send + Sync {
    fn id(&self) -> ElementId;

    /// Display the element is presented on
    fn display(&self) -> DisplayId {
        DisplayId::PRIMARY
    }

    /// Whether the element is currently attached to a live tree
    fn is_active(&self) -> bool;

    fn requested_appearance(&self) -> Appearance;

    fn set_attribute(&self, slot: AttributeSlot, value: ResourceValue);

    /// Reset `slot` to its unset state
    fn clear_attribute(&self, slot: AttributeSlot);

    /// The element's execution-affinity queue
    fn dispatcher(&self) -> Arc<dyn Dispatcher>;

    /// Register a handler for one of the element's lifecycle notifications
    fn subscribe(&self, event: LifecycleEvent, handler: LifecycleHandler);
}
