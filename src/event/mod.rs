// Restricted publish/subscribe
//
// One emitter per use. Plugins get the register-only facet, the driver gets
// the emit-only facet, and neither can see the other's registrations.

// Public API - what other modules can use
pub use dispatcher::Dispatcher;
pub use emitter::SafeEmitter;
pub use events::EmitArgs;
pub use handler::{listener, EmitError, EventEmitter, EventRegistrar, Listener, ListenerError};
pub use registrar::Registrar;

// Internal modules
mod dispatcher;
mod emitter;
mod events;
mod handler;
mod registrar;
