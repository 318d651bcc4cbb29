use crate::node::NodeId;
use thiserror::Error;

/// Failures of structural operations and strong views.
///
/// A lookup that finds nothing is not an error: address searches return
/// `Option`. Every variant here points at a bug in the code building or
/// navigating the tree, so callers should propagate them rather than
/// replace them with a default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The id was not created by this tree.
    #[error("node {0} does not belong to this tree")]
    UnknownNode(NodeId),

    /// The node to insert is the new parent itself, or one of its ancestors.
    #[error("inserting node {child} under node {parent} would create a cycle")]
    Cycle { parent: NodeId, child: NodeId },

    /// A strong view met a node of another kind than the one it declares.
    #[error("expected a {expected} node, but node {node} is a {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
        node: NodeId,
    },

    /// A cursor was asked to leave the node it started from.
    #[error("cannot exit past the root of the tree")]
    ExitPastRoot,
}
