//! Attribute writes as seen by a host-defined element type

use std::sync::{Arc, Mutex};
use tint_core::{
    attributes, Appearance, AttributeSlot, Color, Dispatcher, Element, ElementId,
    ImmediateDispatcher, LifecycleEvent, LifecycleHandler, LifecycleHandlers, ResourceValue,
};
use tint_theme::{
    BinderConfig, ReapplyMode, ResourceDictionary, ResourceTable, SystemSettings, ThemeBinder,
    ThemeVariant,
};

#[derive(Clone, Debug, PartialEq)]
enum Write {
    Clear(AttributeSlot),
    Set(AttributeSlot, ResourceValue),
}

/// Always-active element that records every attribute operation
struct Recorder {
    id: ElementId,
    handlers: LifecycleHandlers,
    log: Mutex<Vec<Write>>,
}

impl Recorder {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            id: ElementId::next(),
            handlers: LifecycleHandlers::new(),
            log: Mutex::new(Vec::new()),
        })
    }

    fn take_log(&self) -> Vec<Write> {
        std::mem::take(&mut *self.log.lock().unwrap())
    }
}

impl Element for Recorder {
    fn id(&self) -> ElementId {
        self.id
    }

    fn is_active(&self) -> bool {
        true
    }

    fn requested_appearance(&self) -> Appearance {
        Appearance::Default
    }

    fn set_attribute(&self, slot: AttributeSlot, value: ResourceValue) {
        self.log.lock().unwrap().push(Write::Set(slot, value));
    }

    fn clear_attribute(&self, slot: AttributeSlot) {
        self.log.lock().unwrap().push(Write::Clear(slot));
    }

    fn dispatcher(&self) -> Arc<dyn Dispatcher> {
        Arc::new(ImmediateDispatcher)
    }

    fn subscribe(&self, event: LifecycleEvent, handler: LifecycleHandler) {
        self.handlers.register(event, handler);
    }
}

fn binder(reapply: ReapplyMode) -> ThemeBinder {
    let store = ResourceDictionary::new().with_table(
        ThemeVariant::Default,
        ResourceTable::new()
            .with("Surface", Color::BLACK)
            .with("Accent", Color::RED)
            .with("CornerRadius", 6.0),
    );
    ThemeBinder::with_config(
        Arc::new(store),
        Arc::new(SystemSettings::new()),
        BinderConfig { reapply },
    )
}

#[test]
fn bindings_apply_in_declaration_order() {
    let binder = binder(ReapplyMode::Overwrite);
    let element = Recorder::new();

    binder.declare_binding(&element, "CornerRadius", attributes::CORNER_RADIUS);
    binder.declare_binding(&element, "Accent", attributes::ACCENT);
    binder.declare_binding(&element, "Surface", attributes::BACKGROUND);
    element.take_log();

    binder.apply_all(&*element);
    assert_eq!(
        element.take_log(),
        vec![
            Write::Set(attributes::CORNER_RADIUS, ResourceValue::Number(6.0)),
            Write::Set(attributes::ACCENT, ResourceValue::Color(Color::RED)),
            Write::Set(attributes::BACKGROUND, ResourceValue::Color(Color::BLACK)),
        ]
    );
}

#[test]
fn replacement_keeps_the_original_position() {
    let binder = binder(ReapplyMode::Overwrite);
    let element = Recorder::new();

    binder.declare_binding(&element, "Accent", attributes::ACCENT);
    binder.declare_binding(&element, "Surface", attributes::BACKGROUND);
    binder.declare_binding(&element, "Surface", attributes::ACCENT);
    element.take_log();

    binder.apply_all(&*element);
    let slots: Vec<AttributeSlot> = element
        .take_log()
        .into_iter()
        .map(|write| match write {
            Write::Set(slot, _) | Write::Clear(slot) => slot,
        })
        .collect();
    assert_eq!(slots, vec![attributes::ACCENT, attributes::BACKGROUND]);
}

#[test]
fn clear_then_set_forces_a_refresh() {
    let binder = binder(ReapplyMode::ClearThenSet);
    let element = Recorder::new();

    binder.declare_binding(&element, "Accent", attributes::ACCENT);
    assert_eq!(
        element.take_log(),
        vec![
            Write::Clear(attributes::ACCENT),
            Write::Set(attributes::ACCENT, ResourceValue::Color(Color::RED)),
        ]
    );
}

#[test]
fn overwrite_mode_never_clears() {
    let binder = binder(ReapplyMode::Overwrite);
    let element = Recorder::new();

    binder.declare_binding(&element, "Accent", attributes::ACCENT);
    binder.apply_all(&*element);

    assert_eq!(
        element.take_log(),
        vec![
            Write::Set(attributes::ACCENT, ResourceValue::Color(Color::RED)),
            Write::Set(attributes::ACCENT, ResourceValue::Color(Color::RED)),
        ]
    );
}
