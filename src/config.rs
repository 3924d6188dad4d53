use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use strum_macros::Display;

use crate::rules::BuiltinRule;
use crate::shared::AppError;

/// How a rule's reports are treated
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Off,
    Warn,
    Error,
}

pub type RuleOptions = Map<String, Value>;

/// Accepted JSON shapes: `"warn"` or `["warn", { "max": 3 }]`
#[derive(Deserialize)]
#[serde(untagged)]
enum RawRuleSetting {
    Severity(Severity),
    WithOptions(Severity, RuleOptions),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawRuleSetting")]
pub struct RuleSetting {
    pub severity: Severity,
    pub options: RuleOptions,
}

impl RuleSetting {
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            options: RuleOptions::new(),
        }
    }

    pub fn with_option(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.options.insert(key.to_string(), value.into());
        self
    }
}

impl From<RawRuleSetting> for RuleSetting {
    fn from(raw: RawRuleSetting) -> Self {
        match raw {
            RawRuleSetting::Severity(severity) => RuleSetting::new(severity),
            RawRuleSetting::WithOptions(severity, options) => RuleSetting { severity, options },
        }
    }
}

/// Which rules run and how
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LintConfig {
    #[serde(default)]
    pub rules: BTreeMap<String, RuleSetting>,
}

impl LintConfig {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        serde_json::from_str(json).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Every built-in rule at `error` with default options
    pub fn all_builtin() -> Self {
        let rules = BuiltinRule::iter()
            .map(|rule| (rule.to_string(), RuleSetting::new(Severity::Error)))
            .collect();
        Self { rules }
    }

    pub fn with_rule(mut self, rule_id: &str, setting: RuleSetting) -> Self {
        self.rules.insert(rule_id.to_string(), setting);
        self
    }

    /// Rules whose severity is not `off`, in id order
    pub fn enabled_rules(&self) -> impl Iterator<Item = (&str, &RuleSetting)> {
        self.rules
            .iter()
            .filter(|(_, setting)| setting.severity != Severity::Off)
            .map(|(id, setting)| (id.as_str(), setting))
    }
}
