//! Theme binder
//!
//! [`ThemeBinder`] keeps element attributes in sync with the active theme
//! variant. Element authors declare which resource drives which attribute;
//! the binder resolves the variant, applies the value, and re-applies it on
//! every relevant change:
//!
//! - the element becomes active (registered, then applied)
//! - the element's requested appearance changes (applied directly)
//! - the settings provider reports changed values (every registered element
//!   is applied, marshaled onto its own affinity queue when needed)
//!
//! Deactivated elements leave the registry but keep their bindings, so a
//! later activation picks up where they left off.

use crate::binding::{BindingChange, BindingRecord, SubscriberState};
use crate::config::{BinderConfig, ReapplyMode};
use crate::registry::SubscriberRegistry;
use crate::resources::ResourceStore;
use crate::settings::SettingsProvider;
use crate::variant::{resolve_variant, ThemeVariant};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Weak};
use tint_core::{AttributeSlot, Element, ElementId, LifecycleEvent, ResourceValue};

/// Bound-element count that triggers the first orphan sweep on declaration
const PRUNE_THRESHOLD: usize = 64;

/// Reactive binding engine
///
/// Cheap to clone; clones share the same registry and bindings.
#[derive(Clone)]
pub struct ThemeBinder {
    inner: Arc<BinderInner>,
}

pub(crate) struct BinderInner {
    pub(crate) store: Arc<dyn ResourceStore>,
    pub(crate) settings: Arc<dyn SettingsProvider>,
    config: BinderConfig,
    registry: SubscriberRegistry,
    subscribers: Mutex<FxHashMap<ElementId, SubscriberState>>,
    /// Sweep orphans once `subscribers` reaches this size
    prune_at: AtomicUsize,
}

impl ThemeBinder {
    /// Create a binder with the default configuration
    pub fn new(store: Arc<dyn ResourceStore>, settings: Arc<dyn SettingsProvider>) -> Self {
        Self::with_config(store, settings, BinderConfig::default())
    }

    /// Create a binder and attach its single settings listener
    pub fn with_config(
        store: Arc<dyn ResourceStore>,
        settings: Arc<dyn SettingsProvider>,
        config: BinderConfig,
    ) -> Self {
        let inner = Arc::new(BinderInner {
            store,
            settings,
            config,
            registry: SubscriberRegistry::new(),
            subscribers: Mutex::new(FxHashMap::default()),
            prune_at: AtomicUsize::new(PRUNE_THRESHOLD),
        });

        let weak = Arc::downgrade(&inner);
        inner.settings.on_values_changed(Arc::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.apply_to_all();
            }
        }));

        Self { inner }
    }

    /// Bind `slot` on `element` to the resource named `resource_key`
    ///
    /// The first declaration for an element installs its lifecycle hooks. A
    /// second declaration for the same slot replaces the first. If the
    /// element is active it is registered and all of its bindings are
    /// applied before this returns.
    ///
    /// # Panics
    ///
    /// Panics if `resource_key` is empty.
    pub fn declare_binding<E>(&self, element: &Arc<E>, resource_key: &str, slot: AttributeSlot)
    where
        E: Element + 'static,
    {
        let element: Arc<dyn Element> = element.clone();
        self.declare_binding_dyn(&element, resource_key, slot);
    }

    /// [`declare_binding`](Self::declare_binding) for type-erased elements
    ///
    /// # Panics
    ///
    /// Panics if `resource_key` is empty.
    pub fn declare_binding_dyn(
        &self,
        element: &Arc<dyn Element>,
        resource_key: &str,
        slot: AttributeSlot,
    ) {
        assert!(
            !resource_key.is_empty(),
            "declare_binding: resource key must not be empty"
        );
        let id = element.id();

        let (change, first_binding) = {
            let mut subscribers = self.inner.subscribers.lock().unwrap();
            let mut first_binding = false;
            let state = subscribers.entry(id).or_insert_with(|| {
                first_binding = true;
                SubscriberState::new(Arc::downgrade(element))
            });
            (
                state.upsert(BindingRecord::new(resource_key, slot)),
                first_binding,
            )
        };

        tracing::trace!(%id, resource_key, %slot, ?change, "declare_binding");

        if first_binding {
            self.inner.prune_if_grown();
            self.install_hooks(element);
        }
        if change == BindingChange::Unchanged {
            return;
        }
        if element.is_active() {
            self.inner.registry.insert(element);
            self.inner.apply_all(element.as_ref());
        }
    }

    /// Resolve and apply every binding of `element`
    ///
    /// Normally driven by lifecycle hooks and settings changes. No-op for an
    /// element without bindings. Must run on the element's affinity thread.
    pub fn apply_all(&self, element: &dyn Element) {
        self.inner.apply_all(element);
    }

    /// Re-apply every registered element, marshaling per element as needed
    pub fn apply_to_all(&self) {
        self.inner.apply_to_all();
    }

    pub fn registry(&self) -> &SubscriberRegistry {
        &self.inner.registry
    }

    pub fn config(&self) -> BinderConfig {
        self.inner.config
    }

    /// Bindings declared on `id`, in declaration order
    pub fn bindings(&self, id: ElementId) -> Vec<BindingRecord> {
        self.inner
            .subscribers
            .lock()
            .unwrap()
            .get(&id)
            .map(|state| state.records().to_vec())
            .unwrap_or_default()
    }

    /// Number of elements holding bindings
    pub fn bound_elements(&self) -> usize {
        self.inner.subscribers.lock().unwrap().len()
    }

    /// Variant `element` resolves to right now
    pub fn variant_for(&self, element: &dyn Element) -> ThemeVariant {
        self.inner.variant_for(element)
    }

    pub(crate) fn inner(&self) -> &BinderInner {
        &self.inner
    }

    fn install_hooks(&self, element: &Arc<dyn Element>) {
        let id = element.id();

        let binder = Arc::downgrade(&self.inner);
        let target = Arc::downgrade(element);
        element.subscribe(
            LifecycleEvent::Activated,
            Arc::new(move || {
                let (Some(inner), Some(element)) = (binder.upgrade(), target.upgrade()) else {
                    return;
                };
                inner.registry.insert(&element);
                inner.apply_all(element.as_ref());
            }),
        );

        let binder = Arc::downgrade(&self.inner);
        element.subscribe(
            LifecycleEvent::Deactivated,
            Arc::new(move || {
                if let Some(inner) = binder.upgrade() {
                    inner.registry.remove(id);
                }
            }),
        );

        let binder = Arc::downgrade(&self.inner);
        let target: Weak<dyn Element> = Arc::downgrade(element);
        element.subscribe(
            LifecycleEvent::AppearanceChanged,
            Arc::new(move || {
                let (Some(inner), Some(element)) = (binder.upgrade(), target.upgrade()) else {
                    return;
                };
                inner.apply_all(element.as_ref());
            }),
        );

        tracing::trace!(%id, "installed theme lifecycle hooks");
    }
}

impl BinderInner {
    pub(crate) fn variant_for(&self, element: &dyn Element) -> ThemeVariant {
        let high_contrast = self.settings.is_high_contrast(element.display());
        resolve_variant(high_contrast, element.requested_appearance())
    }

    fn apply_all(&self, element: &dyn Element) {
        let id = element.id();
        let records: SmallVec<[BindingRecord; 4]> = {
            let subscribers = self.subscribers.lock().unwrap();
            match subscribers.get(&id) {
                Some(state) => state.records().iter().cloned().collect(),
                None => return,
            }
        };

        let variant = self.variant_for(element);
        let Some(table) = self.store.table(variant) else {
            tracing::trace!(%id, %variant, "no resource table for variant");
            return;
        };

        for record in &records {
            match table.get(record.resource_key()) {
                Some(value) => self.write(element, record.slot(), value.clone()),
                None => {
                    tracing::trace!(
                        %id,
                        %variant,
                        resource_key = record.resource_key(),
                        "resource not found, keeping last applied value"
                    );
                }
            }
        }
    }

    fn write(&self, element: &dyn Element, slot: AttributeSlot, value: ResourceValue) {
        tracing::trace!(id = %element.id(), %slot, %value, "applying theme resource");
        match self.config.reapply {
            ReapplyMode::ClearThenSet => {
                element.clear_attribute(slot);
                element.set_attribute(slot, value);
            }
            ReapplyMode::Overwrite => element.set_attribute(slot, value),
        }
    }

    fn apply_to_all(self: &Arc<Self>) {
        self.prune_orphans();
        let members = self.registry.snapshot();
        tracing::debug!(count = members.len(), "theme values changed, re-applying bindings");

        for element in members {
            let dispatcher = element.dispatcher();
            if dispatcher.has_thread_access() {
                self.apply_all(element.as_ref());
                continue;
            }

            let binder = Arc::downgrade(self);
            let target = Arc::downgrade(&element);
            dispatcher.post(Box::new(move || {
                let (Some(inner), Some(element)) = (binder.upgrade(), target.upgrade()) else {
                    return;
                };
                // Deactivated between the post and the pump.
                if !inner.registry.contains(element.id()) {
                    tracing::trace!(id = %element.id(), "skipping queued apply for inactive element");
                    return;
                }
                inner.apply_all(element.as_ref());
            }));
        }
    }

    /// Drop binding state and registry entries of elements that no longer
    /// exist; returns the number of live bound elements
    fn prune_orphans(&self) -> usize {
        let (pruned, live) = {
            let mut subscribers = self.subscribers.lock().unwrap();
            let before = subscribers.len();
            subscribers.retain(|_, state| !state.is_orphaned());
            (before - subscribers.len(), subscribers.len())
        };
        let unregistered = self.registry.prune();
        if pruned > 0 || unregistered > 0 {
            tracing::trace!(pruned, unregistered, "dropped bindings of destroyed elements");
        }
        live
    }

    /// Sweep orphans once the bound-element count doubles since the last sweep,
    /// so element churn without settings events stays bounded
    fn prune_if_grown(&self) {
        let bound = self.subscribers.lock().unwrap().len();
        if bound < self.prune_at.load(Ordering::Relaxed) {
            return;
        }
        let live = self.prune_orphans();
        self.prune_at
            .store((live * 2).max(PRUNE_THRESHOLD), Ordering::Relaxed);
    }
}

impl std::fmt::Debug for ThemeBinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeBinder")
            .field("config", &self.inner.config)
            .field("registry", &self.inner.registry)
            .field("bound_elements", &self.bound_elements())
            .finish()
    }
}
