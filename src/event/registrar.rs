use std::fmt;
use std::rc::Rc;

use super::{
    emitter::{register_listener, SharedRegistry},
    handler::{EventRegistrar, Listener},
};

/// Register-only handle onto a [`SafeEmitter`](super::SafeEmitter)
///
/// Clones share the same registry. Nothing on this type can emit or read back
/// registrations.
pub struct Registrar<T> {
    registry: SharedRegistry<T>,
}

impl<T> Registrar<T> {
    pub(super) fn new(registry: SharedRegistry<T>) -> Self {
        Self { registry }
    }
}

impl<T> Clone for Registrar<T> {
    fn clone(&self) -> Self {
        Self {
            registry: Rc::clone(&self.registry),
        }
    }
}

impl<T> fmt::Debug for Registrar<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Registrar")
    }
}

impl<T> EventRegistrar<T> for Registrar<T> {
    fn register(&self, event_name: &str, listener: Listener<T>) {
        register_listener(&self.registry, event_name, listener);
    }
}
