use std::rc::Rc;
use thiserror::Error;

use super::events::EmitArgs;

/// Errors a listener can raise while reacting to an event
#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("Listener failed: {0}")]
    Failed(String),

    #[error("Missing listener argument #{0}")]
    MissingArgument(usize),
}

impl ListenerError {
    /// Create a listener failure from a message
    pub fn failed(msg: impl Into<String>) -> Self {
        ListenerError::Failed(msg.into())
    }
}

/// A listener failure surfaced through `emit`
///
/// Carries the event that was being emitted and the position of the listener
/// in that event's registration order. Listeners after `position` were not
/// invoked.
#[derive(Debug, Error)]
#[error("Listener #{position} for '{event_name}' failed: {source}")]
pub struct EmitError {
    pub event_name: String,
    pub position: usize,
    #[source]
    pub source: ListenerError,
}

/// A callable registered against an event name
///
/// Receives exactly three positional arguments; `None` stands for an absent
/// argument. There is no receiver: a listener only sees what it captured and
/// what the emitter passes in.
pub type Listener<T> = Rc<dyn Fn(Option<&T>, Option<&T>, Option<&T>) -> Result<(), ListenerError>>;

/// Wrap a closure as a [`Listener`]
pub fn listener<T, F>(f: F) -> Listener<T>
where
    F: Fn(Option<&T>, Option<&T>, Option<&T>) -> Result<(), ListenerError> + 'static,
{
    Rc::new(f)
}

/// The register-only side of an emitter
///
/// This is the only capability handed to plugins: they can add listeners but
/// cannot emit, list, or inspect existing registrations.
pub trait EventRegistrar<T> {
    /// Append `listener` to the sequence for `event_name`
    ///
    /// Registering the same listener twice means it runs twice per emit.
    fn register(&self, event_name: &str, listener: Listener<T>);

    /// Register a closure directly
    fn on<F>(&self, event_name: &str, f: F)
    where
        F: Fn(Option<&T>, Option<&T>, Option<&T>) -> Result<(), ListenerError> + 'static,
        Self: Sized,
    {
        self.register(event_name, listener(f));
    }
}

/// The emit-only side of an emitter
pub trait EventEmitter<T> {
    /// Invoke every listener for `event_name` with `args`, in registration order
    ///
    /// Emitting a name with no listeners is a no-op. The first listener error
    /// stops the emit and comes back wrapped in an [`EmitError`]; nothing is
    /// caught or logged.
    fn emit_args(&self, event_name: &str, args: EmitArgs<'_, T>) -> Result<(), EmitError>;

    /// Names that currently have at least one listener, in first-registration order
    fn event_names(&self) -> Vec<String>;

    /// Emit with up to three arguments, e.g. `()`, `&a`, `(&a, &b)`
    fn emit<'a, A>(&self, event_name: &str, args: A) -> Result<(), EmitError>
    where
        A: Into<EmitArgs<'a, T>>,
        T: 'a,
        Self: Sized,
    {
        self.emit_args(event_name, args.into())
    }
}
