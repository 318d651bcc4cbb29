//! Node identity, node kinds and the borrowed [`NodeRef`] view.

use crate::display::TreeFormatter;
use crate::tree::{ADDRESS_SEPARATOR, Tree};
use crate::view::Narrow;
use crate::visit::Descendants;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Index of a node inside the arena of the [`Tree`] that created it.
///
/// Ids are only meaningful for the tree that handed them out. They stay
/// valid for the whole lifetime of that tree, including while the node is
/// detached.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a node is, as far as the generic tree cares.
///
/// Implementors are usually a tagged enum over every node kind of a domain.
/// The tree never inspects a kind beyond these three methods.
pub trait NodeKind {
    /// The single path segment this node contributes to its address.
    ///
    /// Nodes without an identifier are not addressable, and they cut the
    /// address chain of their descendants.
    fn identifier(&self) -> Option<&str>;

    /// Short description printed by the tree dump.
    ///
    /// `None` is printed as the [`PLACEHOLDER`](crate::display::PLACEHOLDER).
    fn payload(&self) -> Option<&dyn fmt::Display>;

    /// Name of the concrete kind, used in type mismatch reports.
    fn kind_name(&self) -> &'static str;
}

/// Storage slot for one node.
#[derive(Debug, Clone)]
pub(crate) struct NodeData<K> {
    pub(crate) kind: K,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl<K> NodeData<K> {
    pub(crate) fn new(kind: K) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Read-only handle to a node of a borrowed tree.
///
/// This is the weakly-typed view: parent and children come back as
/// `NodeRef`s whatever their kind. Use [`NodeRef::cast`] or the
/// [`StrongParent`](crate::StrongParent) /
/// [`StrongChildren`](crate::StrongChildren) adapters to get typed views.
pub struct NodeRef<'t, K> {
    tree: &'t Tree<K>,
    id: NodeId,
}

// Manual implementations: K itself does not need to be Copy.
impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for NodeRef<'_, K> {}

impl<K> PartialEq for NodeRef<'_, K> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl<K> Eq for NodeRef<'_, K> {}

impl<'t, K: NodeKind> NodeRef<'t, K> {
    /// Callers guarantee that `id` was created by `tree`.
    pub(crate) fn new(tree: &'t Tree<K>, id: NodeId) -> Self {
        Self { tree, id }
    }

    fn data(self) -> &'t NodeData<K> {
        &self.tree.nodes[self.id.0]
    }

    pub fn id(self) -> NodeId {
        self.id
    }

    pub fn tree(self) -> &'t Tree<K> {
        self.tree
    }

    /// The kind value this node was created with.
    pub fn kind(self) -> &'t K {
        &self.data().kind
    }

    pub fn identifier(self) -> Option<&'t str> {
        self.kind().identifier()
    }

    /// Parent node (weakly-typed).
    pub fn parent(self) -> Option<NodeRef<'t, K>> {
        self.data().parent.map(|id| NodeRef::new(self.tree, id))
    }

    /// Children in insertion order (weakly-typed, read-only).
    ///
    /// To change the list, use [`Tree::insert`] and [`Tree::detach`].
    pub fn children(
        self,
    ) -> impl ExactSizeIterator<Item = NodeRef<'t, K>> + DoubleEndedIterator + 't {
        let tree = self.tree;
        self.data()
            .children
            .iter()
            .map(move |&id| NodeRef::new(tree, id))
    }

    pub fn child_count(self) -> usize {
        self.data().children.len()
    }

    /// Number of parent links between this node and the top of its chain.
    pub fn depth(self) -> usize {
        let mut depth = 0;
        let mut current = self.parent();
        while let Some(node) = current {
            depth += 1;
            current = node.parent();
        }
        depth
    }

    /// Dot-joined identifiers from the nearest identifier-less ancestor down
    /// to this node.
    ///
    /// Returns `None` if this node has no identifier. The address is
    /// recomputed on every call; nothing is cached in the tree.
    pub fn address(self) -> Option<String> {
        let mut segments: Vec<&str> = Vec::new();
        let mut current = Some(self);
        while let Some(node) = current {
            match node.identifier() {
                Some(segment) => segments.push(segment),
                None => break,
            }
            current = node.parent();
        }

        if segments.is_empty() {
            return None;
        }
        segments.reverse();
        Some(segments.join(ADDRESS_SEPARATOR))
    }

    /// Find this node or one of its (in)direct children by address.
    ///
    /// Returns the first node in pre-order whose address ends with `query`.
    /// The test is a plain character suffix test: `"x"` also matches
    /// `"POINT2D.x"` and a node named `"xx"`.
    pub fn find(self, query: &str) -> Option<NodeRef<'t, K>> {
        self.descendants().find(|node| {
            node.address()
                .is_some_and(|address| address.ends_with(query))
        })
    }

    /// Like [`NodeRef::find`], but returns `None` when the found node is not
    /// an `N`.
    pub fn find_as<N: Narrow<'t, K>>(self, query: &str) -> Option<N> {
        self.find(query).and_then(N::narrow)
    }

    /// Narrow this node to the typed view `N`, if it is one.
    pub fn cast<N: Narrow<'t, K>>(self) -> Option<N> {
        N::narrow(self)
    }

    /// This node followed by all of its descendants, in pre-order.
    pub fn descendants(self) -> Descendants<'t, K> {
        Descendants::new(self)
    }

    /// Indented dump of this subtree.
    pub fn render(self) -> String {
        TreeFormatter::format(self)
    }
}

impl<K: NodeKind> fmt::Display for NodeRef<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<K: NodeKind> fmt::Debug for NodeRef<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("kind", &self.kind().kind_name())
            .field("address", &self.address())
            .finish()
    }
}
