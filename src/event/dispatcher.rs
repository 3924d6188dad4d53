use std::fmt;
use std::rc::Rc;

use super::{
    emitter::{emit_to_listeners, registered_event_names, SharedRegistry},
    events::EmitArgs,
    handler::{EmitError, EventEmitter},
};

/// Emit-only handle onto a [`SafeEmitter`](super::SafeEmitter)
///
/// Held by the code that drives events (e.g. a tree traversal). It can emit
/// and list event names but cannot add listeners.
pub struct Dispatcher<T> {
    registry: SharedRegistry<T>,
}

impl<T> Dispatcher<T> {
    pub(super) fn new(registry: SharedRegistry<T>) -> Self {
        Self { registry }
    }
}

impl<T> Clone for Dispatcher<T> {
    fn clone(&self) -> Self {
        Self {
            registry: Rc::clone(&self.registry),
        }
    }
}

impl<T> fmt::Debug for Dispatcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("event_names", &self.event_names())
            .finish()
    }
}

impl<T> EventEmitter<T> for Dispatcher<T> {
    fn emit_args(&self, event_name: &str, args: EmitArgs<'_, T>) -> Result<(), EmitError> {
        emit_to_listeners(&self.registry, event_name, args)
    }

    fn event_names(&self) -> Vec<String> {
        registered_event_names(&self.registry)
    }
}
