use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, trace};

use super::{
    dispatcher::Dispatcher,
    events::EmitArgs,
    handler::{EmitError, EventEmitter, EventRegistrar, Listener},
    registrar::Registrar,
};

/// Event name -> listeners, plus the order in which names first appeared
pub(super) struct Registry<T> {
    listeners: HashMap<String, Vec<Listener<T>>>,
    order: Vec<String>,
}

impl<T> Registry<T> {
    fn new() -> Self {
        Self {
            listeners: HashMap::new(),
            order: Vec::new(),
        }
    }
}

pub(super) type SharedRegistry<T> = Rc<RefCell<Registry<T>>>;

/// Isolated event registration and dispatch
///
/// Listeners for a name run synchronously on the caller's stack, in the order
/// they were registered. The registry itself is never handed out: callers only
/// see the list of event names, and listeners only see their arguments.
///
/// Hand out [`SafeEmitter::registrar`] to code that should only add listeners
/// and [`SafeEmitter::dispatcher`] to code that should only emit.
pub struct SafeEmitter<T> {
    registry: SharedRegistry<T>,
}

impl<T> SafeEmitter<T> {
    /// Creates an emitter with an empty registry
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry::new())),
        }
    }

    /// Register-only view sharing this emitter's registry
    pub fn registrar(&self) -> Registrar<T> {
        Registrar::new(Rc::clone(&self.registry))
    }

    /// Emit-only view sharing this emitter's registry
    pub fn dispatcher(&self) -> Dispatcher<T> {
        Dispatcher::new(Rc::clone(&self.registry))
    }
}

impl<T> Default for SafeEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SafeEmitter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SafeEmitter")
            .field("event_names", &self.event_names())
            .finish()
    }
}

impl<T> EventRegistrar<T> for SafeEmitter<T> {
    fn register(&self, event_name: &str, listener: Listener<T>) {
        register_listener(&self.registry, event_name, listener);
    }
}

impl<T> EventEmitter<T> for SafeEmitter<T> {
    fn emit_args(&self, event_name: &str, args: EmitArgs<'_, T>) -> Result<(), EmitError> {
        emit_to_listeners(&self.registry, event_name, args)
    }

    fn event_names(&self) -> Vec<String> {
        registered_event_names(&self.registry)
    }
}

pub(super) fn register_listener<T>(
    registry: &SharedRegistry<T>,
    event_name: &str,
    listener: Listener<T>,
) {
    let mut registry = registry.borrow_mut();
    let Registry { listeners, order } = &mut *registry;

    let sequence = listeners.entry(event_name.to_string()).or_insert_with(|| {
        order.push(event_name.to_string());
        Vec::new()
    });
    sequence.push(listener);

    debug!(
        event_name = %event_name,
        listener_count = sequence.len(),
        "Listener registered"
    );
}

/// Runs a snapshot of the listeners taken before the first call.
///
/// Listeners added while this emit is running are not part of it. The
/// registry borrow is released before any listener runs, so a listener may
/// register more listeners without a borrow conflict.
pub(super) fn emit_to_listeners<T>(
    registry: &SharedRegistry<T>,
    event_name: &str,
    args: EmitArgs<'_, T>,
) -> Result<(), EmitError> {
    let snapshot = match registry.borrow().listeners.get(event_name) {
        Some(listeners) => listeners.clone(),
        None => {
            trace!(event_name = %event_name, "No listeners for event");
            return Ok(());
        }
    };

    trace!(
        event_name = %event_name,
        listener_count = snapshot.len(),
        arg_count = args.len(),
        "Emitting event"
    );

    for (position, listener) in snapshot.iter().enumerate() {
        listener(args.0, args.1, args.2).map_err(|source| EmitError {
            event_name: event_name.to_string(),
            position,
            source,
        })?;
    }

    Ok(())
}

pub(super) fn registered_event_names<T>(registry: &SharedRegistry<T>) -> Vec<String> {
    registry.borrow().order.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::handler::ListenerError;
    use rstest::rstest;
    use std::cell::{Cell, RefCell};

    type Calls = Rc<RefCell<Vec<(&'static str, Option<i32>, Option<i32>, Option<i32>)>>>;

    fn recorder(emitter: &SafeEmitter<i32>, event_name: &str, tag: &'static str, calls: &Calls) {
        let calls = Rc::clone(calls);
        emitter.on(event_name, move |a, b, c| {
            calls.borrow_mut().push((tag, a.copied(), b.copied(), c.copied()));
            Ok(())
        });
    }

    #[test]
    fn test_emit_without_listeners_is_noop() {
        let emitter: SafeEmitter<i32> = SafeEmitter::new();

        assert!(emitter.emit("Unregistered", ()).is_ok());
        assert!(emitter.event_names().is_empty());
    }

    #[test]
    fn test_listeners_run_in_registration_order() {
        let emitter = SafeEmitter::new();
        let calls: Calls = Rc::new(RefCell::new(Vec::new()));

        recorder(&emitter, "Program", "f", &calls);
        recorder(&emitter, "Program", "g", &calls);

        emitter.emit("Program", &7).unwrap();

        assert_eq!(
            *calls.borrow(),
            vec![("f", Some(7), None, None), ("g", Some(7), None, None)]
        );
    }

    #[rstest]
    #[case(EmitArgs::none(), (None, None, None))]
    #[case(EmitArgs(Some(&1), None, None), (Some(1), None, None))]
    #[case(EmitArgs(Some(&1), Some(&2), None), (Some(1), Some(2), None))]
    #[case(EmitArgs(Some(&1), Some(&2), Some(&3)), (Some(1), Some(2), Some(3)))]
    fn test_listener_receives_exact_arguments(
        #[case] args: EmitArgs<'static, i32>,
        #[case] expected: (Option<i32>, Option<i32>, Option<i32>),
    ) {
        let emitter = SafeEmitter::new();
        let calls: Calls = Rc::new(RefCell::new(Vec::new()));
        recorder(&emitter, "e", "f", &calls);

        emitter.emit_args("e", args).unwrap();

        assert_eq!(
            *calls.borrow(),
            vec![("f", expected.0, expected.1, expected.2)]
        );
    }

    #[test]
    fn test_duplicate_registration_runs_twice() {
        let emitter: SafeEmitter<i32> = SafeEmitter::new();
        let count = Rc::new(Cell::new(0));

        let counted = {
            let count = Rc::clone(&count);
            crate::event::listener(move |_, _, _| {
                count.set(count.get() + 1);
                Ok(())
            })
        };
        emitter.register("e", Rc::clone(&counted));
        emitter.register("e", counted);

        emitter.emit("e", ()).unwrap();
        assert_eq!(count.get(), 2);

        emitter.emit("e", ()).unwrap();
        assert_eq!(count.get(), 4);
    }

    #[test]
    fn test_failing_listener_stops_the_emit() {
        let emitter: SafeEmitter<i32> = SafeEmitter::new();
        let second_ran = Rc::new(Cell::new(false));

        emitter.on("e", |_, _, _| Err(ListenerError::failed("boom")));
        {
            let second_ran = Rc::clone(&second_ran);
            emitter.on("e", move |_, _, _| {
                second_ran.set(true);
                Ok(())
            });
        }

        let err = emitter.emit("e", ()).unwrap_err();

        assert_eq!(err.event_name, "e");
        assert_eq!(err.position, 0);
        assert!(matches!(err.source, ListenerError::Failed(ref msg) if msg == "boom"));
        assert!(!second_ran.get());
    }

    #[test]
    fn test_event_names_follow_first_registration_order() {
        let emitter: SafeEmitter<i32> = SafeEmitter::new();

        emitter.on("y", |_, _, _| Ok(()));
        emitter.on("x", |_, _, _| Ok(()));
        emitter.on("y", |_, _, _| Ok(()));

        assert_eq!(emitter.event_names(), vec!["y".to_string(), "x".to_string()]);
        // Listing never mutates
        assert_eq!(emitter.event_names(), vec!["y".to_string(), "x".to_string()]);
    }

    #[test]
    fn test_listener_registered_during_emit_waits_for_next_emit() {
        let emitter: SafeEmitter<i32> = SafeEmitter::new();
        let registrar = emitter.registrar();
        let late_calls = Rc::new(Cell::new(0));

        {
            let late_calls = Rc::clone(&late_calls);
            emitter.on("e", move |_, _, _| {
                let late_calls = Rc::clone(&late_calls);
                registrar.on("e", move |_, _, _| {
                    late_calls.set(late_calls.get() + 1);
                    Ok(())
                });
                Ok(())
            });
        }

        emitter.emit("e", ()).unwrap();
        assert_eq!(late_calls.get(), 0);

        emitter.emit("e", ()).unwrap();
        assert_eq!(late_calls.get(), 1);
    }
}
