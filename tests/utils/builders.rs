use safe_emitter::Node;

/// A small program touching every built-in rule
///
/// ```text
/// 1:0  Program
/// 1:4    Identifier "x"            (id-length)
/// 2:0    BlockStatement
/// 3:2      BlockStatement
/// 4:4        BlockStatement        (max-depth with max 2, no-empty-block)
/// 5:2      DebuggerStatement       (no-debugger)
/// 6:0    Identifier "total"
/// ```
#[allow(dead_code)]
pub fn sample_program() -> Node {
    Node::new("Program")
        .at(1, 0)
        .with_child(Node::new("Identifier").with_name("x").at(1, 4))
        .with_child(
            Node::new("BlockStatement")
                .at(2, 0)
                .with_child(
                    Node::new("BlockStatement")
                        .at(3, 2)
                        .with_child(Node::new("BlockStatement").at(4, 4)),
                )
                .with_child(Node::new("DebuggerStatement").at(5, 2)),
        )
        .with_child(Node::new("Identifier").with_name("total").at(6, 0))
}
