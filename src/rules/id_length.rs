use crate::ast::Node;
use crate::event::{listener, EventRegistrar};
use crate::shared::AppError;

use super::{require_node, Rule, RuleContext};

const DEFAULT_MIN: u64 = 2;

pub struct IdLengthRule;

impl Rule for IdLengthRule {
    fn id(&self) -> &'static str {
        "id-length"
    }

    fn create(
        &self,
        context: RuleContext,
        registrar: &dyn EventRegistrar<Node>,
    ) -> Result<(), AppError> {
        let min = context.option_u64("min", DEFAULT_MIN)? as usize;

        registrar.register(
            "Identifier",
            listener(move |node, _, _| {
                let node = require_node(node)?;
                let name = node.name.as_deref().unwrap_or_default();
                if name.chars().count() < min {
                    context.report(
                        node,
                        format!("Identifier name '{name}' is too short (< {min})"),
                    );
                }
                Ok(())
            }),
        );

        Ok(())
    }
}
