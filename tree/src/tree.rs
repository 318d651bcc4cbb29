//! The arena that owns every node, and the structural mutations on it.

use crate::error::TreeError;
use crate::node::{NodeData, NodeId, NodeKind, NodeRef};
use crate::view::Narrow;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use tracing::{trace, warn};

/// Separator placed between identifiers in a node address.
pub const ADDRESS_SEPARATOR: &str = ".";

/// A tree of nodes of kind `K`, stored in a single arena.
///
/// The tree owns every node it ever created. Parents refer to their
/// children by [`NodeId`], and children keep a non-owning back-reference
/// to their parent. Detached nodes stay in the arena (unreachable from the
/// root) and can be attached again later; they are released with the tree.
///
/// # Example
///
/// ```
/// # use core::fmt;
/// # use ddtree_tree::{NodeKind, Tree};
/// # #[derive(Debug)]
/// # struct Named(&'static str);
/// # impl NodeKind for Named {
/// #     fn identifier(&self) -> Option<&str> { Some(self.0) }
/// #     fn payload(&self) -> Option<&dyn fmt::Display> { None }
/// #     fn kind_name(&self) -> &'static str { "Named" }
/// # }
/// let mut tree = Tree::new(Named("root"));
/// let child = tree.create(Named("child"));
/// tree.insert(tree.root(), child).unwrap();
/// assert_eq!(tree.parent(child), Some(tree.root()));
///
/// assert!(tree.detach_self(child));
/// assert_eq!(tree.parent(child), None);
/// assert!(tree.children(tree.root()).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Tree<K> {
    pub(crate) nodes: Vec<NodeData<K>>,
    root: NodeId,
}

impl<K: NodeKind> Tree<K> {
    /// Create a tree holding a single root node.
    pub fn new(root: K) -> Self {
        Self {
            nodes: vec![NodeData::new(root)],
            root: NodeId(0),
        }
    }

    /// The node the tree was created with.
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn root_ref(&self) -> NodeRef<'_, K> {
        NodeRef::new(self, self.root)
    }

    /// Number of nodes in the arena, attached or not.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Create a node with no parent and no children.
    ///
    /// The node is not part of the tree structure until it is inserted.
    pub fn create(&mut self, kind: K) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData::new(kind));
        id
    }

    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_, K>> {
        self.contains(id).then(|| NodeRef::new(self, id))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    pub fn kind(&self, id: NodeId) -> Option<&K> {
        self.nodes.get(id.0).map(|node| &node.kind)
    }

    /// Parent node (weakly-typed).
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|node| node.parent)
    }

    /// Children of `id` in insertion order. Empty for an unknown id.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    /// Append `child` to the children of `parent` and point its parent
    /// back-reference at `parent`.
    ///
    /// The child is *not* removed from a previous parent: after inserting a
    /// node that already has a parent, it is listed by both parents while
    /// its back-reference (and so its address) follows the new one only.
    /// Detach first to move a node.
    ///
    /// Fails with [`TreeError::Cycle`] if `parent` is `child` or lies in the
    /// subtree of `child`.
    pub fn insert(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        self.check(parent)?;
        self.check(child)?;
        if self.reaches(child, parent) {
            return Err(TreeError::Cycle { parent, child });
        }

        if let Some(previous) = self.nodes[child.0].parent {
            warn!(
                %child, %previous, %parent,
                "node inserted without being detached from its previous parent"
            );
        }
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
        trace!(%parent, %child, "inserted node");
        Ok(())
    }

    /// Remove `child` from the children of `parent`.
    ///
    /// Nothing happens if `child` is not one of them. Otherwise the
    /// back-reference of `child` is cleared, even when it pointed at another
    /// parent that still lists it. Returns whether the child list changed.
    pub fn detach(&mut self, parent: NodeId, child: NodeId) -> bool {
        let Some(slot) = self.nodes.get_mut(parent.0) else {
            return false;
        };
        let Some(position) = slot.children.iter().position(|&id| id == child) else {
            return false;
        };
        slot.children.remove(position);

        if let Some(node) = self.nodes.get_mut(child.0) {
            node.parent = None;
        }
        trace!(%parent, %child, "detached node");
        true
    }

    /// Remove `id` from its parent's children. No-op for a parentless node.
    pub fn detach_self(&mut self, id: NodeId) -> bool {
        match self.parent(id) {
            Some(parent) => self.detach(parent, id),
            None => false,
        }
    }

    /// Address of `id`, see [`NodeRef::address`].
    pub fn address(&self, id: NodeId) -> Option<String> {
        self.get(id)?.address()
    }

    /// Search `from` and its descendants by address, see [`NodeRef::find`].
    pub fn find(&self, from: NodeId, query: &str) -> Option<NodeId> {
        self.get(from)?.find(query).map(NodeRef::id)
    }

    /// Typed search: `None` if nothing matches or the match is not an `N`.
    pub fn find_as<'t, N: Narrow<'t, K>>(&'t self, from: NodeId, query: &str) -> Option<N> {
        self.get(from)?.find_as(query)
    }

    /// Indented dump of the subtree rooted at `id`.
    pub fn render(&self, id: NodeId) -> Option<String> {
        self.get(id).map(NodeRef::render)
    }

    fn check(&self, id: NodeId) -> Result<(), TreeError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(TreeError::UnknownNode(id))
        }
    }

    /// Whether `target` is `from` or lies below it in the child lists.
    ///
    /// Walks child lists rather than back-references so that nodes listed
    /// by two parents are covered too.
    fn reaches(&self, from: NodeId, target: NodeId) -> bool {
        let mut stack = vec![from];
        while let Some(id) = stack.pop() {
            if id == target {
                return true;
            }
            stack.extend_from_slice(self.children(id));
        }
        false
    }
}

impl<K: NodeKind> fmt::Display for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root_ref(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use pretty_assertions::assert_eq;

    #[derive(Debug)]
    struct Named(Option<&'static str>);

    impl NodeKind for Named {
        fn identifier(&self) -> Option<&str> {
            self.0
        }

        fn payload(&self) -> Option<&dyn fmt::Display> {
            self.0.as_ref().map(|name| name as &dyn fmt::Display)
        }

        fn kind_name(&self) -> &'static str {
            "Named"
        }
    }

    fn named(tree: &mut Tree<Named>, parent: NodeId, name: &'static str) -> NodeId {
        let id = tree.create(Named(Some(name)));
        tree.insert(parent, id).unwrap();
        id
    }

    #[test]
    fn test_insert_sets_parent_and_keeps_order() {
        let mut tree = Tree::new(Named(None));
        let root = tree.root();
        let b = named(&mut tree, root, "b");
        let a = named(&mut tree, root, "a");

        assert_eq!(tree.children(root), &[b, a]);
        assert_eq!(tree.parent(a), Some(root));
        assert_eq!(tree.parent(root), None);
    }

    #[test]
    fn test_address_chain() {
        let mut tree = Tree::new(Named(None));
        let root = tree.root();
        let a = named(&mut tree, root, "a");
        let b = named(&mut tree, a, "b");

        assert_eq!(tree.address(root), None);
        assert_eq!(tree.address(a).as_deref(), Some("a"));
        assert_eq!(tree.address(b).as_deref(), Some("a.b"));
    }

    #[test]
    fn test_address_restarts_below_anonymous_node() {
        let mut tree = Tree::new(Named(None));
        let root = tree.root();
        let a = named(&mut tree, root, "a");
        let anonymous = tree.create(Named(None));
        tree.insert(a, anonymous).unwrap();
        let c = named(&mut tree, anonymous, "c");

        assert_eq!(tree.address(anonymous), None);
        assert_eq!(tree.address(c).as_deref(), Some("c"));
    }

    #[test]
    fn test_address_follows_structure_after_detach() {
        let mut tree = Tree::new(Named(None));
        let root = tree.root();
        let a = named(&mut tree, root, "a");
        let b = named(&mut tree, a, "b");

        tree.detach(a, b);
        assert_eq!(tree.address(b).as_deref(), Some("b"));
    }

    #[test]
    fn test_find_is_preorder() {
        let mut tree = Tree::new(Named(None));
        let root = tree.root();
        let a = named(&mut tree, root, "a");
        let ax = named(&mut tree, a, "x");
        let x = named(&mut tree, root, "x");

        assert_eq!(tree.find(root, "x"), Some(ax));
        assert_eq!(tree.find(root, "a.x"), Some(ax));
        assert_eq!(tree.find(a, "x"), Some(ax));
        assert_ne!(tree.find(root, "x"), Some(x));
        assert_eq!(tree.find(root, "missing"), None);
    }

    #[test]
    fn test_find_is_character_suffix() {
        let mut tree = Tree::new(Named(None));
        let root = tree.root();
        let xx = named(&mut tree, root, "xx");
        let x = named(&mut tree, root, "x");

        assert_eq!(tree.find(root, "x"), Some(xx));
        assert_eq!(tree.find(root, "xx"), Some(xx));
        assert_ne!(tree.find(root, "x"), Some(x));
    }

    #[test]
    fn test_find_skips_detached_nodes() {
        let mut tree = Tree::new(Named(None));
        let root = tree.root();
        let a = named(&mut tree, root, "a");
        tree.detach_self(a);

        assert_eq!(tree.find(root, "a"), None);
        assert_eq!(tree.find(a, "a"), Some(a));
    }

    #[test]
    fn test_detach_absent_child_is_noop() {
        let mut tree = Tree::new(Named(None));
        let root = tree.root();
        let a = named(&mut tree, root, "a");
        let b = named(&mut tree, a, "b");

        assert!(!tree.detach(root, b));
        assert_eq!(tree.children(root), &[a]);
        assert_eq!(tree.parent(b), Some(a));
    }

    #[test]
    fn test_detach_self_without_parent_is_noop() {
        let mut tree = Tree::new(Named(None));
        let orphan = tree.create(Named(Some("orphan")));

        assert!(!tree.detach_self(orphan));
        assert!(!tree.detach_self(tree.root()));
    }

    #[test]
    fn test_insert_rejects_cycles() {
        let mut tree = Tree::new(Named(None));
        let root = tree.root();
        let a = named(&mut tree, root, "a");
        let b = named(&mut tree, a, "b");

        assert_eq!(tree.insert(a, a), Err(TreeError::Cycle { parent: a, child: a }));
        assert_eq!(tree.insert(b, a), Err(TreeError::Cycle { parent: b, child: a }));
        assert_eq!(
            tree.insert(b, root),
            Err(TreeError::Cycle { parent: b, child: root })
        );
        assert_eq!(tree.children(b), &[] as &[NodeId]);
    }

    #[test]
    fn test_insert_rejects_cycles_through_duplicate_listing() {
        let mut tree = Tree::new(Named(None));
        let root = tree.root();
        let a = named(&mut tree, root, "a");
        let b = named(&mut tree, a, "b");
        // b is now listed by both root and a, with its back-reference on root.
        tree.insert(root, b).unwrap();

        assert_eq!(tree.insert(b, a), Err(TreeError::Cycle { parent: b, child: a }));
    }

    #[test]
    fn test_detach_clears_parent_set_by_another_insert() {
        let mut tree = Tree::new(Named(None));
        let root = tree.root();
        let a = named(&mut tree, root, "a");
        let b = named(&mut tree, root, "b");
        tree.insert(a, b).unwrap();

        assert!(tree.detach(root, b));
        assert_eq!(tree.parent(b), None);
        assert_eq!(tree.children(a), &[b]);
        assert_eq!(tree.children(root), &[a]);
    }

    #[test]
    fn test_insert_unknown_node() {
        let mut tree = Tree::new(Named(None));
        let stranger = NodeId(42);

        assert_eq!(
            tree.insert(tree.root(), stranger),
            Err(TreeError::UnknownNode(stranger))
        );
        assert_eq!(tree.address(stranger), None);
        assert_eq!(tree.children(stranger), &[] as &[NodeId]);
    }

    #[test]
    fn test_display_renders_root() {
        let mut tree = Tree::new(Named(None));
        let root = tree.root();
        let a = named(&mut tree, root, "a");
        named(&mut tree, a, "b");

        assert_eq!(tree.to_string(), "?\n  a\n    b\n");
    }
}
