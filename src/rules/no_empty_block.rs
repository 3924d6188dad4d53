use crate::ast::Node;
use crate::event::{listener, EventRegistrar};
use crate::shared::AppError;

use super::{require_node, Rule, RuleContext};

pub struct NoEmptyBlockRule;

impl Rule for NoEmptyBlockRule {
    fn id(&self) -> &'static str {
        "no-empty-block"
    }

    fn create(
        &self,
        context: RuleContext,
        registrar: &dyn EventRegistrar<Node>,
    ) -> Result<(), AppError> {
        registrar.register(
            "BlockStatement",
            listener(move |node, _, _| {
                let node = require_node(node)?;
                if node.children.is_empty() {
                    context.report(node, "Empty block statement");
                }
                Ok(())
            }),
        );

        Ok(())
    }
}
