use std::cell::RefCell;
use std::rc::Rc;

use safe_emitter::{listener, EventRegistrar, Listener, ListenerError};

// ============================================================================
// Recording listeners
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub tag: &'static str,
    pub args: (Option<i32>, Option<i32>, Option<i32>),
}

/// Shared log that listeners append to, in invocation order
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Rc<RefCell<Vec<RecordedCall>>>,
}

#[allow(dead_code)]
impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A listener that records its arguments under `tag`
    pub fn recorder(&self, tag: &'static str) -> Listener<i32> {
        let calls = Rc::clone(&self.calls);
        listener(move |a, b, c| {
            calls.borrow_mut().push(RecordedCall {
                tag,
                args: (a.copied(), b.copied(), c.copied()),
            });
            Ok(())
        })
    }

    /// A listener that records under `tag` and then fails
    pub fn failing(&self, tag: &'static str) -> Listener<i32> {
        let calls = Rc::clone(&self.calls);
        listener(move |a, b, c| {
            calls.borrow_mut().push(RecordedCall {
                tag,
                args: (a.copied(), b.copied(), c.copied()),
            });
            Err(ListenerError::failed(format!("{tag} failed")))
        })
    }

    pub fn register(
        &self,
        registrar: &impl EventRegistrar<i32>,
        event_name: &str,
        tag: &'static str,
    ) {
        registrar.register(event_name, self.recorder(tag));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    pub fn tags(&self) -> Vec<&'static str> {
        self.calls.borrow().iter().map(|call| call.tag).collect()
    }
}
