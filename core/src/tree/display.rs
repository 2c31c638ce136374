//! Indented rendering of subtrees, for debugging and test assertions.

use core::fmt;

use super::node::Node;

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_subtree(self, f, 0)
    }
}

fn fmt_subtree(node: &Node, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str("  ")?;
    }
    match node.label() {
        Some(label) => writeln!(f, "{:?} {:?}", node.kind(), label)?,
        None => writeln!(f, "{:?}", node.kind())?,
    }
    for child in node.children() {
        fmt_subtree(child, f, depth + 1)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tree::{Node, NodeKind};
    use crate::{ToString, vec};
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_kinds_and_labels_with_indentation() {
        let tree = Node::with_children(
            NodeKind::JavaMethod,
            vec![
                Node::with_label(NodeKind::NameIdentifier, "main"),
                Node::with_children(
                    NodeKind::Block,
                    vec![Node::with_label(
                        NodeKind::JavaStringLiteralExpression,
                        "hello",
                    )],
                ),
            ],
        );
        assert_eq!(
            tree.to_string(),
            "JavaMethod\n  NameIdentifier \"main\"\n  Block\n    JavaStringLiteralExpression \"hello\"\n"
        );
    }
}
