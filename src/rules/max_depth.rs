use std::cell::Cell;
use std::rc::Rc;

use crate::ast::Node;
use crate::event::{listener, EventRegistrar};
use crate::shared::AppError;

use super::{require_node, Rule, RuleContext};

const DEFAULT_MAX: u64 = 4;

/// Reports blocks nested more than `max` levels deep
pub struct MaxDepthRule;

impl Rule for MaxDepthRule {
    fn id(&self) -> &'static str {
        "max-depth"
    }

    fn create(
        &self,
        context: RuleContext,
        registrar: &dyn EventRegistrar<Node>,
    ) -> Result<(), AppError> {
        let max = context.option_u64("max", DEFAULT_MAX)?;
        let depth = Rc::new(Cell::new(0u64));

        {
            let depth = Rc::clone(&depth);
            registrar.register(
                "BlockStatement",
                listener(move |node, _, _| {
                    let node = require_node(node)?;
                    depth.set(depth.get() + 1);
                    if depth.get() > max {
                        context.report(
                            node,
                            format!(
                                "Blocks are nested too deeply ({}). Maximum allowed is {}",
                                depth.get(),
                                max
                            ),
                        );
                    }
                    Ok(())
                }),
            );
        }

        registrar.register(
            "BlockStatement:exit",
            listener(move |_, _, _| {
                depth.set(depth.get().saturating_sub(1));
                Ok(())
            }),
        );

        Ok(())
    }
}
