use tracing::debug;

use super::node::Node;
use crate::event::{EmitArgs, EmitError, EventEmitter};

/// Depth-first walk that turns a tree into emitter events
///
/// For each node: emits `node_type` with `(node, parent)`, walks the
/// children, then emits `"{node_type}:exit"` with the same arguments. The
/// root has no parent, so its second argument is absent.
#[derive(Debug, Default)]
pub struct Traverser {
    visited: usize,
}

impl Traverser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk `root`, stopping at the first listener failure
    pub fn traverse<E>(&mut self, root: &Node, emitter: &E) -> Result<(), EmitError>
    where
        E: EventEmitter<Node>,
    {
        self.visited = 0;
        self.visit(root, None, emitter)?;

        debug!(node_count = self.visited, "Traversal finished");
        Ok(())
    }

    /// Nodes entered by the last traversal
    pub fn visited(&self) -> usize {
        self.visited
    }

    fn visit<E>(&mut self, node: &Node, parent: Option<&Node>, emitter: &E) -> Result<(), EmitError>
    where
        E: EventEmitter<Node>,
    {
        self.visited += 1;
        emitter.emit_args(&node.node_type, EmitArgs(Some(node), parent, None))?;

        for child in &node.children {
            self.visit(child, Some(node), emitter)?;
        }

        emitter.emit_args(&node.exit_event(), EmitArgs(Some(node), parent, None))
    }
}
