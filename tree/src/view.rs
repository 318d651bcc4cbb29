//! Strongly-typed views over the weakly-typed tree.
//!
//! The tree stores every node the same way. A domain recovers typing by
//! defining small view structs (one per kind, or per group of kinds) that
//! implement [`Narrow`]. A view may then declare what its neighbours are:
//!
//! - [`StrongParent`]: "my parent, if any, is exactly a `Parent`"
//! - [`StrongChildren`]: "my children are exactly `Child`s"
//!
//! Both adapters are provided methods over the single [`narrow_all`]
//! helper, so a domain writes no navigation code of its own. A node that
//! does not match the declaration is reported as
//! [`TreeError::TypeMismatch`]: this means the tree was built wrongly.

use crate::error::TreeError;
use crate::node::{NodeKind, NodeRef};
use alloc::vec::Vec;

/// A typed view that can be recovered from a weakly-typed node.
pub trait Narrow<'t, K: NodeKind + 't>: Sized {
    /// Name of the kind (or group of kinds) this view accepts.
    const KIND: &'static str;

    /// Returns the view if `node` is of the accepted kind.
    fn narrow(node: NodeRef<'t, K>) -> Option<Self>;

    /// The underlying weakly-typed node.
    fn node(&self) -> NodeRef<'t, K>;
}

/// Narrow every node of `nodes` to `N`, keeping their order.
///
/// Fails on the first node that is not an `N`.
pub fn narrow_all<'t, K, N, I>(nodes: I) -> Result<Vec<N>, TreeError>
where
    K: NodeKind + 't,
    N: Narrow<'t, K>,
    I: IntoIterator<Item = NodeRef<'t, K>>,
{
    nodes
        .into_iter()
        .map(|node| {
            N::narrow(node).ok_or_else(|| TreeError::TypeMismatch {
                expected: N::KIND,
                found: node.kind().kind_name(),
                node: node.id(),
            })
        })
        .collect()
}

/// A view whose parent, if present, is always a `Self::Parent`.
pub trait StrongParent<'t, K: NodeKind + 't>: Narrow<'t, K> {
    type Parent: Narrow<'t, K>;

    /// This node's parent, strongly-typed.
    ///
    /// `Ok(None)` for a node without parent.
    fn strong_parent(&self) -> Result<Option<Self::Parent>, TreeError> {
        Ok(narrow_all(self.node().parent())?.pop())
    }
}

/// A view whose children are all `Self::Child`s.
pub trait StrongChildren<'t, K: NodeKind + 't>: Narrow<'t, K> {
    type Child: Narrow<'t, K>;

    /// This node's children, strongly-typed.
    ///
    /// The returned list is a copy: it cannot be used to change the tree.
    /// To add or remove children, use [`Tree::insert`](crate::Tree::insert)
    /// and [`Tree::detach`](crate::Tree::detach) on the node itself.
    fn strong_children(&self) -> Result<Vec<Self::Child>, TreeError> {
        narrow_all(self.node().children())
    }
}
