use crate::ast::Node;
use crate::event::{listener, EventRegistrar};
use crate::shared::AppError;

use super::{require_node, Rule, RuleContext};

pub struct NoDebuggerRule;

impl Rule for NoDebuggerRule {
    fn id(&self) -> &'static str {
        "no-debugger"
    }

    fn create(
        &self,
        context: RuleContext,
        registrar: &dyn EventRegistrar<Node>,
    ) -> Result<(), AppError> {
        registrar.register(
            "DebuggerStatement",
            listener(move |node, _, _| {
                let node = require_node(node)?;
                context.report(node, "Unexpected debugger statement");
                Ok(())
            }),
        );

        Ok(())
    }
}
