use crate::node::{NodeKind, NodeRef};
use crate::visit::TreeVisitor;
use alloc::string::String;
use core::fmt::Write;

/// Printed in place of the payload of a node that has none (the root).
pub const PLACEHOLDER: &str = "?";

/// Indentation added per level of depth.
pub const INDENT: &str = "  ";

/// Visitor that dumps a subtree as indented text.
///
/// One line per node, in pre-order, indented by two spaces per level of
/// depth below the starting node, each line terminated by `\n`.
pub struct TreeFormatter {
    output: String,
}

impl TreeFormatter {
    pub fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    pub fn format<K: NodeKind>(node: NodeRef<'_, K>) -> String {
        let mut formatter = Self::new();
        formatter.visit_node(node, 0);
        formatter.output
    }
}

impl Default for TreeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: NodeKind> TreeVisitor<K> for TreeFormatter {
    fn visit_node(&mut self, node: NodeRef<'_, K>, depth: usize) {
        for _ in 0..depth {
            self.output.push_str(INDENT);
        }
        let _ = match node.kind().payload() {
            Some(payload) => writeln!(self.output, "{}", payload),
            None => writeln!(self.output, "{}", PLACEHOLDER),
        };
        self.super_visit_node(node, depth);
    }
}
