use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;
use tracing::{debug, info, instrument};

use crate::ast::{Node, Traverser};
use crate::config::LintConfig;
use crate::event::{EventEmitter, SafeEmitter};
use crate::rules::{BuiltinRule, Report, RuleContext};
use crate::shared::AppError;

/// Runs the configured rules over a tree
///
/// Each lint gets a fresh emitter. Rules receive its register-only facet and
/// the traverser drives its emit-only facet, so rules never see one another.
pub struct Linter {
    config: LintConfig,
}

impl Linter {
    pub fn new(config: LintConfig) -> Self {
        Self { config }
    }

    #[instrument(skip(self, root), fields(root_type = %root.node_type))]
    pub fn lint(&self, root: &Node) -> Result<Vec<Report>, AppError> {
        let emitter: SafeEmitter<Node> = SafeEmitter::new();
        let registrar = emitter.registrar();
        let reports = Rc::new(RefCell::new(Vec::new()));

        let mut rule_count = 0;
        for (rule_id, setting) in self.config.enabled_rules() {
            let builtin = BuiltinRule::from_str(rule_id)
                .map_err(|_| AppError::Config(format!("Unknown rule: {rule_id}")))?;
            let rule = builtin.rule();

            let context = RuleContext::new(
                rule.id(),
                setting.severity,
                setting.options.clone(),
                Rc::clone(&reports),
            );
            rule.create(context, &registrar)?;
            rule_count += 1;

            debug!(rule_id = rule.id(), severity = %setting.severity, "Rule created");
        }

        let dispatcher = emitter.dispatcher();
        info!(
            rule_count = rule_count,
            event_count = dispatcher.event_names().len(),
            "Starting traversal"
        );

        let mut traverser = Traverser::new();
        traverser.traverse(root, &dispatcher)?;

        let mut reports = reports.take();
        reports.sort_by(|a, b| a.loc.cmp(&b.loc).then_with(|| a.rule_id.cmp(&b.rule_id)));

        info!(
            node_count = traverser.visited(),
            report_count = reports.len(),
            "Lint finished"
        );
        Ok(reports)
    }
}
