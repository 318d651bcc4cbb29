use crate::node::{NodeKind, NodeRef};
use alloc::vec;
use alloc::vec::Vec;

/// Trait for visiting a subtree.
///
/// The default implementation walks every node in pre-order (a node, then
/// its children left to right) and passes along the depth relative to the
/// node the walk started from.
///
/// # Example
///
/// ```
/// # use core::fmt;
/// # use ddtree_tree::{NodeKind, NodeRef, Tree, TreeVisitor};
/// # #[derive(Debug)]
/// # struct Named(&'static str);
/// # impl NodeKind for Named {
/// #     fn identifier(&self) -> Option<&str> { Some(self.0) }
/// #     fn payload(&self) -> Option<&dyn fmt::Display> { None }
/// #     fn kind_name(&self) -> &'static str { "Named" }
/// # }
/// struct DepthCalculator {
///     max_depth: usize,
/// }
///
/// impl<K: NodeKind> TreeVisitor<K> for DepthCalculator {
///     fn visit_node(&mut self, node: NodeRef<'_, K>, depth: usize) {
///         self.max_depth = self.max_depth.max(depth);
///         self.super_visit_node(node, depth);
///     }
/// }
///
/// let mut tree = Tree::new(Named("a"));
/// let b = tree.create(Named("b"));
/// let c = tree.create(Named("c"));
/// tree.insert(tree.root(), b).unwrap();
/// tree.insert(b, c).unwrap();
///
/// let mut calc = DepthCalculator { max_depth: 0 };
/// calc.visit_node(tree.root_ref(), 0);
/// assert_eq!(calc.max_depth, 2);
/// ```
pub trait TreeVisitor<K: NodeKind> {
    /// Visit a node.
    ///
    /// Override this to customize behavior for all nodes.
    /// Call `super_visit_node` to recurse into the children.
    fn visit_node(&mut self, node: NodeRef<'_, K>, depth: usize) {
        self.super_visit_node(node, depth)
    }

    /// Default recursion into the children.
    ///
    /// Override `visit_node` instead of this method.
    fn super_visit_node(&mut self, node: NodeRef<'_, K>, depth: usize) {
        for child in node.children() {
            self.visit_node(child, depth + 1);
        }
    }
}

/// Pre-order iterator over a node and its descendants.
///
/// Created by [`NodeRef::descendants`].
pub struct Descendants<'t, K> {
    stack: Vec<NodeRef<'t, K>>,
}

impl<'t, K: NodeKind> Descendants<'t, K> {
    pub(crate) fn new(start: NodeRef<'t, K>) -> Self {
        Self { stack: vec![start] }
    }
}

impl<'t, K: NodeKind> Iterator for Descendants<'t, K> {
    type Item = NodeRef<'t, K>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reversed so the leftmost child is popped first.
        self.stack.extend(node.children().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tree;
    use alloc::vec::Vec;
    use core::fmt;

    #[derive(Debug)]
    struct Named(&'static str);

    impl NodeKind for Named {
        fn identifier(&self) -> Option<&str> {
            Some(self.0)
        }

        fn payload(&self) -> Option<&dyn fmt::Display> {
            None
        }

        fn kind_name(&self) -> &'static str {
            "Named"
        }
    }

    fn sample() -> Tree<Named> {
        // r
        //   a
        //     b
        //   c
        let mut tree = Tree::new(Named("r"));
        let a = tree.create(Named("a"));
        let b = tree.create(Named("b"));
        let c = tree.create(Named("c"));
        tree.insert(tree.root(), a).unwrap();
        tree.insert(a, b).unwrap();
        tree.insert(tree.root(), c).unwrap();
        tree
    }

    #[test]
    fn test_descendants_preorder() {
        let tree = sample();
        let names: Vec<_> = tree
            .root_ref()
            .descendants()
            .filter_map(NodeRef::identifier)
            .collect();
        assert_eq!(names, ["r", "a", "b", "c"]);
    }

    #[test]
    fn test_visitor_depths() {
        struct Collect(Vec<(&'static str, usize)>);

        impl TreeVisitor<Named> for Collect {
            fn visit_node(&mut self, node: NodeRef<'_, Named>, depth: usize) {
                self.0.push((node.kind().0, depth));
                self.super_visit_node(node, depth);
            }
        }

        let tree = sample();
        let mut collect = Collect(Vec::new());
        collect.visit_node(tree.root_ref(), 0);
        assert_eq!(collect.0, [("r", 0), ("a", 1), ("b", 2), ("c", 1)]);
    }
}
