mod id_length;
mod max_depth;
mod no_debugger;
mod no_empty_block;

pub use id_length::IdLengthRule;
pub use max_depth::MaxDepthRule;
pub use no_debugger::NoDebuggerRule;
pub use no_empty_block::NoEmptyBlockRule;

use serde::Serialize;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use strum_macros::{Display, EnumIter, EnumString};

use crate::ast::{Location, Node};
use crate::config::{RuleOptions, Severity};
use crate::event::{EventRegistrar, ListenerError};
use crate::shared::AppError;

/// A finding produced by a rule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub rule_id: String,
    pub severity: Severity,
    pub message: String,
    pub node_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.loc {
            Some(loc) => write!(f, "{}:{}", loc.line, loc.column)?,
            None => f.write_str("-:-")?,
        }
        write!(f, "  {}  {}  {}", self.severity, self.message, self.rule_id)
    }
}

/// Everything a rule may touch: its own options and a way to report
///
/// Cloned into each listener a rule registers. Reports from every rule land in
/// the same sink, but a rule can only append to it.
#[derive(Clone)]
pub struct RuleContext {
    rule_id: &'static str,
    severity: Severity,
    options: RuleOptions,
    reports: Rc<RefCell<Vec<Report>>>,
}

impl RuleContext {
    pub fn new(
        rule_id: &'static str,
        severity: Severity,
        options: RuleOptions,
        reports: Rc<RefCell<Vec<Report>>>,
    ) -> Self {
        Self {
            rule_id,
            severity,
            options,
            reports,
        }
    }

    /// Non-negative integer option, `default` when absent
    pub fn option_u64(&self, key: &str, default: u64) -> Result<u64, AppError> {
        match self.options.get(key) {
            None => Ok(default),
            Some(value) => value.as_u64().ok_or_else(|| {
                AppError::Config(format!(
                    "Rule '{}' option '{}' must be a non-negative integer, got {}",
                    self.rule_id, key, value
                ))
            }),
        }
    }

    pub fn report(&self, node: &Node, message: impl Into<String>) {
        self.reports.borrow_mut().push(Report {
            rule_id: self.rule_id.to_string(),
            severity: self.severity,
            message: message.into(),
            node_type: node.node_type.clone(),
            loc: node.loc,
        });
    }
}

/// A lint rule
///
/// `create` runs once per lint. The rule gets only the register-only facet of
/// the emitter: it can subscribe to node events but cannot emit, list, or
/// reach other rules' listeners.
pub trait Rule {
    fn id(&self) -> &'static str;

    /// Fails only when the rule's options are invalid
    fn create(
        &self,
        context: RuleContext,
        registrar: &dyn EventRegistrar<Node>,
    ) -> Result<(), AppError>;
}

/// First listener argument, which the traverser always supplies
pub(crate) fn require_node(node: Option<&Node>) -> Result<&Node, ListenerError> {
    node.ok_or(ListenerError::MissingArgument(0))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum BuiltinRule {
    MaxDepth,
    NoEmptyBlock,
    IdLength,
    NoDebugger,
}

impl BuiltinRule {
    pub fn rule(&self) -> Box<dyn Rule> {
        match self {
            BuiltinRule::MaxDepth => Box::new(MaxDepthRule),
            BuiltinRule::NoEmptyBlock => Box::new(NoEmptyBlockRule),
            BuiltinRule::IdLength => Box::new(IdLengthRule),
            BuiltinRule::NoDebugger => Box::new(NoDebuggerRule),
        }
    }
}
