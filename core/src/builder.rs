use crate::code_element::TypeDefinitionEntry;
use crate::data_node::{DataKind, DataNode, DataTree};
use ddtree_tree::{Cursor, NodeId, NodeKind, TreeError};
use tracing::debug;

/// Builds a [`DataTree`] top-down, the way a parser walks the source.
///
/// A thin wrapper over [`Cursor`] that knows about data division nodes: it
/// is the only way to make a strongly typed type description, and it
/// reports every type description it leaves.
#[derive(Debug)]
pub struct DataTreeBuilder<'a> {
    cursor: Cursor<DataNode<'a>>,
    type_definitions: usize,
}

impl<'a> DataTreeBuilder<'a> {
    /// Start a new tree with a root node.
    pub fn new() -> Self {
        Self {
            cursor: Cursor::new(DataNode::root()),
            type_definitions: 0,
        }
    }

    /// Add a node under the current one and move onto it.
    pub fn enter(&mut self, node: DataNode<'a>) -> Result<NodeId, TreeError> {
        self.cursor.enter(node)
    }

    /// Enter a `TYPEDEF STRONG` type description.
    pub fn enter_strong_type(
        &mut self,
        entry: &'a TypeDefinitionEntry<'a>,
    ) -> Result<NodeId, TreeError> {
        self.cursor.enter(DataNode::strong_type_description(entry))
    }

    /// Move back to the parent of the current node.
    pub fn exit(&mut self) -> Result<NodeId, TreeError> {
        let left = self.cursor.exit()?;
        self.on_exit(left);
        Ok(left)
    }

    /// Add a node without children: enter and exit at once.
    pub fn leaf(&mut self, node: DataNode<'a>) -> Result<NodeId, TreeError> {
        self.enter(node)?;
        self.exit()
    }

    pub fn current(&self) -> NodeId {
        self.cursor.current()
    }

    pub fn tree(&self) -> &DataTree<'a> {
        self.cursor.tree()
    }

    /// Number of type descriptions left so far.
    pub fn type_definitions(&self) -> usize {
        self.type_definitions
    }

    pub fn finish(self) -> DataTree<'a> {
        self.cursor.into_tree()
    }

    fn on_exit(&mut self, node: NodeId) {
        let Some(kind) = self.cursor.tree().kind(node) else {
            return;
        };
        if kind.kind() != DataKind::TypeDescription {
            return;
        }
        self.type_definitions += 1;
        let size = kind
            .element()
            .and_then(|element| element.type_definition())
            .map_or(0, |entry| entry.size);
        debug!(
            %node,
            name = kind.identifier(),
            size,
            strong = kind.is_strong(),
            "type definition"
        );
    }
}

impl Default for DataTreeBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}
