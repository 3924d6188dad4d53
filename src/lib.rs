// Library crate for the safe emitter and the lint host built on it
// This file exposes the public API for integration tests

pub mod ast;
pub mod cli;
pub mod config;
pub mod event;
pub mod linter;
pub mod rules;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use ast::{Location, Node, Traverser};
pub use config::{LintConfig, RuleSetting, Severity};
pub use event::{
    listener, Dispatcher, EmitArgs, EmitError, EventEmitter, EventRegistrar, Listener,
    ListenerError, Registrar, SafeEmitter,
};
pub use linter::Linter;
pub use rules::{BuiltinRule, Report, Rule, RuleContext};
pub use shared::AppError;
