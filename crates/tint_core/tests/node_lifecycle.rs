use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tint_core::{
    attributes, Appearance, Color, Element, ImmediateDispatcher, LifecycleEvent, Node,
    ThreadDispatcher,
};

fn counting_handler(counter: &Arc<AtomicUsize>) -> Arc<dyn Fn() + Send + Sync> {
    let counter = counter.clone();
    Arc::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn activation_notifies_only_on_transitions() {
    let node = Node::new(Arc::new(ImmediateDispatcher));
    let activated = Arc::new(AtomicUsize::new(0));
    let deactivated = Arc::new(AtomicUsize::new(0));
    node.subscribe(LifecycleEvent::Activated, counting_handler(&activated));
    node.subscribe(LifecycleEvent::Deactivated, counting_handler(&deactivated));

    node.activate();
    node.activate();
    assert!(node.is_active());
    assert_eq!(activated.load(Ordering::SeqCst), 1);

    node.deactivate();
    node.deactivate();
    assert!(!node.is_active());
    assert_eq!(deactivated.load(Ordering::SeqCst), 1);

    node.activate();
    assert_eq!(activated.load(Ordering::SeqCst), 2);
}

#[test]
fn appearance_change_notifies_when_value_differs() {
    let node = Node::new(Arc::new(ImmediateDispatcher)).with_appearance(Appearance::Dark);
    let changed = Arc::new(AtomicUsize::new(0));
    node.subscribe(LifecycleEvent::AppearanceChanged, counting_handler(&changed));

    node.set_requested_appearance(Appearance::Dark);
    assert_eq!(changed.load(Ordering::SeqCst), 0);

    node.set_requested_appearance(Appearance::Light);
    assert_eq!(node.requested_appearance(), Appearance::Light);
    assert_eq!(changed.load(Ordering::SeqCst), 1);
}

#[test]
fn writes_are_counted_even_for_equal_values() {
    let (dispatcher, _queue) = ThreadDispatcher::for_current_thread();
    let node = Node::new(dispatcher);

    node.set_attribute(attributes::FOREGROUND, Color::WHITE.into());
    node.set_attribute(attributes::FOREGROUND, Color::WHITE.into());
    assert_eq!(node.write_count(), 2);

    node.clear_attribute(attributes::FOREGROUND);
    assert_eq!(node.attribute(attributes::FOREGROUND), None);
}
