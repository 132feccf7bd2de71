use std::cell::RefCell;
use std::rc::{Rc, Weak};

use rustc_hash::FxHashMap;

use super::CameraCallback;
use crate::camera::Camera;

type Slot = Rc<RefCell<CameraCallback>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    callbacks: FxHashMap<u64, Slot>,
}

/// Camera-change subscription registry for host implementations.
///
/// Each [`CameraNotifier::subscribe`] call returns a [`Subscription`];
/// dropping it unregisters the callback. Callbacks run in registration
/// order and may subscribe or unsubscribe while a notification is being
/// dispatched.
#[derive(Default)]
pub struct CameraNotifier {
    registry: Rc<RefCell<Registry>>,
}

impl CameraNotifier {
    /// Create an empty notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback.
    pub fn subscribe(&self, callback: CameraCallback) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        let _ = registry
            .callbacks
            .insert(id, Rc::new(RefCell::new(callback)));
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Invoke every live callback with the current camera.
    pub fn notify(&self, camera: Option<&Camera>) {
        let mut pending: Vec<(u64, Slot)> = self
            .registry
            .borrow()
            .callbacks
            .iter()
            .map(|(id, slot)| (*id, Rc::clone(slot)))
            .collect();
        pending.sort_unstable_by_key(|(id, _)| *id);

        for (id, slot) in pending {
            if !self.registry.borrow().callbacks.contains_key(&id) {
                continue;
            }
            // A callback that re-enters notification is not run recursively.
            if let Ok(mut callback) = slot.try_borrow_mut() {
                let callback: &mut CameraCallback = &mut callback;
                callback(camera);
            }
        }
    }

    /// Number of registered callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.borrow().callbacks.len()
    }

    /// Whether no callbacks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handle for a registered camera callback. Dropping it unsubscribes.
#[must_use = "dropping a subscription immediately unregisters its callback"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Whether the callback is still registered with a live notifier.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.borrow().callbacks.contains_key(&self.id))
    }

    /// Unregister now. Equivalent to dropping the handle.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let _ = registry.borrow_mut().callbacks.remove(&self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
