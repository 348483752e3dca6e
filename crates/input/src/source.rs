//! Key-down listener registry and the lane-input installer.

use crate::action::Action;
use crate::keymap::{Key, action_for_key};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

type Listener = Rc<RefCell<dyn FnMut(&Key)>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: BTreeMap<u64, Listener>,
}

/// Source of key-down events with an add/remove listener pair.
///
/// The host event loop feeds it with [`KeyboardSource::key_down`]. Single-threaded:
/// listeners run synchronously on the caller's thread.
#[derive(Default)]
pub struct KeyboardSource {
    registry: Rc<RefCell<Registry>>,
}

impl KeyboardSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a key-down listener. The returned handle removes it again.
    pub fn add_listener(&self, listener: impl FnMut(&Key) + 'static) -> Subscription {
        let mut reg = self.registry.borrow_mut();
        let id = reg.next_id;
        reg.next_id += 1;
        reg.listeners.insert(id, Rc::new(RefCell::new(listener)));
        tracing::debug!(listener = id, "key-down listener added");
        Subscription {
            registry: Rc::downgrade(&self.registry),
            id: Some(id),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    /// Deliver one key-down event to every registered listener.
    ///
    /// Listeners may unsubscribe (themselves or others) while being invoked; the
    /// change takes effect from the next event.
    pub fn key_down(&self, key: &Key) {
        let listeners: Vec<Listener> = self.registry.borrow().listeners.values().cloned().collect();
        for listener in listeners {
            let mut f = listener.borrow_mut();
            (*f)(key);
        }
    }
}

/// Deregistration handle for a key-down listener.
///
/// Dropping the handle leaves the listener installed; call
/// [`Subscription::unsubscribe`] to remove it.
#[derive(Debug)]
pub struct Subscription {
    registry: Weak<RefCell<Registry>>,
    id: Option<u64>,
}

impl Subscription {
    /// Remove the listener. Calling this again, or after the source is gone,
    /// does nothing.
    pub fn unsubscribe(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.remove(&id);
            tracing::debug!(listener = id, "key-down listener removed");
        }
    }

    pub fn is_active(&self) -> bool {
        self.id.is_some() && self.registry.strong_count() > 0
    }
}

/// Install the lane controls on `source`: ArrowLeft/`a` produce
/// [`Action::LaneLeft`], ArrowRight/`d` produce [`Action::LaneRight`], every other
/// key produces nothing.
pub fn install_input(
    source: &KeyboardSource,
    mut on_action: impl FnMut(Action) + 'static,
) -> Subscription {
    source.add_listener(move |key| {
        if let Some(action) = action_for_key(key) {
            on_action(action);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<Action>>>, impl FnMut(Action) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |a| sink.borrow_mut().push(a))
    }

    #[test]
    fn a_and_arrow_left_each_yield_one_lane_left() {
        let source = KeyboardSource::new();
        let (seen, on_action) = recorder();
        let _sub = install_input(&source, on_action);

        source.key_down(&Key::character('a'));
        assert_eq!(*seen.borrow(), vec![Action::LaneLeft]);

        source.key_down(&Key::ArrowLeft);
        assert_eq!(*seen.borrow(), vec![Action::LaneLeft, Action::LaneLeft]);
    }

    #[test]
    fn unrelated_key_yields_nothing() {
        let source = KeyboardSource::new();
        let (seen, on_action) = recorder();
        let _sub = install_input(&source, on_action);

        source.key_down(&Key::character('x'));
        source.key_down(&Key::Other);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn unsubscribe_stops_delivery_and_is_idempotent() {
        let source = KeyboardSource::new();
        let (seen, on_action) = recorder();
        let mut sub = install_input(&source, on_action);
        assert!(sub.is_active());
        assert_eq!(source.listener_count(), 1);

        sub.unsubscribe();
        sub.unsubscribe();
        assert!(!sub.is_active());
        assert_eq!(source.listener_count(), 0);

        source.key_down(&Key::character('d'));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn unsubscribe_after_source_dropped() {
        let source = KeyboardSource::new();
        let (_seen, on_action) = recorder();
        let mut sub = install_input(&source, on_action);
        drop(source);
        assert!(!sub.is_active());
        sub.unsubscribe();
    }

    #[test]
    fn unsubscribe_only_removes_own_listener() {
        let source = KeyboardSource::new();
        let (first, on_first) = recorder();
        let (second, on_second) = recorder();
        let mut a = install_input(&source, on_first);
        let _b = install_input(&source, on_second);

        a.unsubscribe();
        source.key_down(&Key::ArrowRight);
        assert!(first.borrow().is_empty());
        assert_eq!(*second.borrow(), vec![Action::LaneRight]);
    }

    #[test]
    fn dropping_handle_keeps_listener() {
        let source = KeyboardSource::new();
        let (seen, on_action) = recorder();
        drop(install_input(&source, on_action));

        source.key_down(&Key::character('D'));
        assert_eq!(*seen.borrow(), vec![Action::LaneRight]);
    }
}
