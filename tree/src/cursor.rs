use crate::error::TreeError;
use crate::node::{NodeId, NodeKind};
use crate::tree::Tree;
use tracing::debug;

/// Builds a tree top-down with an explicit enter/exit protocol.
///
/// The cursor starts on the root. [`Cursor::enter`] adds a node under the
/// current one and moves onto it; [`Cursor::exit`] moves back to the
/// parent. There is no separate stack: the way back is the parent chain
/// of the tree itself.
///
/// Nesting is not validated: any kind can be entered under any other.
///
/// # Example
///
/// ```
/// # use core::fmt;
/// # use ddtree_tree::{Cursor, NodeKind};
/// # #[derive(Debug)]
/// # struct Named(&'static str);
/// # impl NodeKind for Named {
/// #     fn identifier(&self) -> Option<&str> { Some(self.0) }
/// #     fn payload(&self) -> Option<&dyn fmt::Display> { None }
/// #     fn kind_name(&self) -> &'static str { "Named" }
/// # }
/// let mut cursor = Cursor::new(Named("root"));
/// let a = cursor.enter(Named("a")).unwrap();
/// let b = cursor.enter(Named("b")).unwrap();
/// assert_eq!(cursor.exit().unwrap(), b);
/// assert_eq!(cursor.exit().unwrap(), a);
/// assert!(cursor.exit().is_err());
///
/// let tree = cursor.into_tree();
/// assert_eq!(tree.address(b).as_deref(), Some("root.a.b"));
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<K> {
    tree: Tree<K>,
    current: NodeId,
}

impl<K: NodeKind> Cursor<K> {
    /// Start a new tree with the given root kind.
    pub fn new(root: K) -> Self {
        Self::from_tree(Tree::new(root))
    }

    /// Continue building an existing tree, starting from its root.
    pub fn from_tree(tree: Tree<K>) -> Self {
        let current = tree.root();
        Self { tree, current }
    }

    /// The node new nodes are added under.
    pub fn current(&self) -> NodeId {
        self.current
    }

    pub fn tree(&self) -> &Tree<K> {
        &self.tree
    }

    /// Stop building and hand the tree over.
    pub fn into_tree(self) -> Tree<K> {
        self.tree
    }

    /// Create a node, append it to the current node and make it current.
    pub fn enter(&mut self, kind: K) -> Result<NodeId, TreeError> {
        let node = self.tree.create(kind);
        self.enter_node(node)?;
        Ok(node)
    }

    /// Append an existing node to the current node and make it current.
    ///
    /// Same rules as [`Tree::insert`]: the node is not detached from a
    /// previous parent.
    pub fn enter_node(&mut self, node: NodeId) -> Result<(), TreeError> {
        self.tree.insert(self.current, node)?;
        debug!(
            parent = %self.current,
            %node,
            kind = self.tree.kind(node).map(K::kind_name),
            "entered node"
        );
        self.current = node;
        Ok(())
    }

    /// Move back to the parent of the current node.
    ///
    /// Returns the node that was left. Fails with
    /// [`TreeError::ExitPastRoot`] when the current node has no parent;
    /// the cursor does not move in that case.
    pub fn exit(&mut self) -> Result<NodeId, TreeError> {
        let left = self.current;
        let parent = self.tree.parent(left).ok_or(TreeError::ExitPastRoot)?;
        debug!(node = %left, %parent, "exited node");
        self.current = parent;
        Ok(left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt;

    #[derive(Debug)]
    struct Named(&'static str);

    impl NodeKind for Named {
        fn identifier(&self) -> Option<&str> {
            Some(self.0)
        }

        fn payload(&self) -> Option<&dyn fmt::Display> {
            Some(&self.0)
        }

        fn kind_name(&self) -> &'static str {
            "Named"
        }
    }

    #[test]
    fn test_enter_exit_builds_siblings() {
        let mut cursor = Cursor::new(Named("r"));
        let a = cursor.enter(Named("a")).unwrap();
        cursor.exit().unwrap();
        let b = cursor.enter(Named("b")).unwrap();
        cursor.exit().unwrap();

        let tree = cursor.tree();
        assert_eq!(cursor.current(), tree.root());
        assert_eq!(tree.children(tree.root()), &[a, b]);
    }

    #[test]
    fn test_exit_past_root_is_reported() {
        let mut cursor = Cursor::new(Named("r"));
        assert_eq!(cursor.exit(), Err(TreeError::ExitPastRoot));
        assert_eq!(cursor.current(), cursor.tree().root());
    }

    #[test]
    fn test_enter_node_rejects_cycle() {
        let mut cursor = Cursor::new(Named("r"));
        let root = cursor.tree().root();
        let a = cursor.enter(Named("a")).unwrap();

        assert_eq!(
            cursor.enter_node(root),
            Err(TreeError::Cycle {
                parent: a,
                child: root,
            })
        );
        assert_eq!(cursor.current(), a);
    }
}
