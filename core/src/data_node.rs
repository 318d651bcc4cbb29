//! The node kinds of a data division tree.

use crate::code_element::{
    CodeElement, DataConditionEntry, DataDescriptionEntry, DataDivisionHeader, DataSectionHeader,
    TypeDefinitionEntry,
};
use bitflags::bitflags;
use core::fmt;
use ddtree_tree::{NodeKind, NodeRef, Tree};

/// A tree of data division nodes.
pub type DataTree<'a> = Tree<DataNode<'a>>;

/// A weakly-typed node of a [`DataTree`].
pub type DataNodeRef<'t, 'a> = NodeRef<'t, DataNode<'a>>;

bitflags! {
    /// Kind-local properties of a node.
    ///
    /// Computed from the node kind and the construction path; generic tree
    /// operations never change them.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct DataFlags: u8 {
        /// The section's items are visible to external callers (linkage).
        const SHARED = 1;
        /// The type definition is strongly typed (`TYPEDEF STRONG`).
        const STRONG = 1 << 1;
    }
}

/// Tag of a [`DataNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataKind {
    Root,
    DataDivision,
    WorkingStorageSection,
    LocalStorageSection,
    LinkageSection,
    DataDescription,
    DataCondition,
    TypeDescription,
}

impl DataKind {
    pub fn name(self) -> &'static str {
        match self {
            DataKind::Root => "Root",
            DataKind::DataDivision => "DataDivision",
            DataKind::WorkingStorageSection => "WorkingStorageSection",
            DataKind::LocalStorageSection => "LocalStorageSection",
            DataKind::LinkageSection => "LinkageSection",
            DataKind::DataDescription => "DataDescription",
            DataKind::DataCondition => "DataCondition",
            DataKind::TypeDescription => "TypeDescription",
        }
    }

    /// Fixed address segment of structural kinds.
    ///
    /// Definitions are addressed by their name instead; the root and the
    /// division are not addressable.
    pub fn literal_identifier(self) -> Option<&'static str> {
        match self {
            DataKind::WorkingStorageSection => Some("working"),
            DataKind::LocalStorageSection => Some("local"),
            DataKind::LinkageSection => Some("linkage"),
            _ => None,
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind and payload of one data division node.
///
/// The payload is fixed at construction. The only way to get a strongly
/// typed type description is through
/// [`DataTreeBuilder::enter_strong_type`](crate::DataTreeBuilder::enter_strong_type).
/// Not `Clone`: a kind can only be read out of a tree, never duplicated into
/// another node, so strong typing stays with the node the builder made.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct DataNode<'a> {
    element: Option<CodeElement<'a>>,
    strong: bool,
}

impl<'a> DataNode<'a> {
    /// The payload-less node at the top of a tree.
    pub fn root() -> Self {
        Self {
            element: None,
            strong: false,
        }
    }

    pub fn division(header: &'a DataDivisionHeader) -> Self {
        Self::from_element(CodeElement::DataDivisionHeader(header))
    }

    pub fn section(header: &'a DataSectionHeader) -> Self {
        Self::from_element(CodeElement::DataSectionHeader(header))
    }

    pub fn description(entry: &'a DataDescriptionEntry<'a>) -> Self {
        Self::from_element(CodeElement::DataDescriptionEntry(entry))
    }

    pub fn condition(entry: &'a DataConditionEntry<'a>) -> Self {
        Self::from_element(CodeElement::DataConditionEntry(entry))
    }

    /// A type description that is not strongly typed.
    pub fn type_description(entry: &'a TypeDefinitionEntry<'a>) -> Self {
        Self::from_element(CodeElement::TypeDefinitionEntry(entry))
    }

    pub(crate) fn strong_type_description(entry: &'a TypeDefinitionEntry<'a>) -> Self {
        Self {
            element: Some(CodeElement::TypeDefinitionEntry(entry)),
            strong: true,
        }
    }

    /// The node kind matching a payload record.
    pub fn from_element(element: CodeElement<'a>) -> Self {
        Self {
            element: Some(element),
            strong: false,
        }
    }

    /// The payload, `None` for the root.
    pub fn element(&self) -> Option<CodeElement<'a>> {
        self.element
    }

    pub fn kind(&self) -> DataKind {
        match self.element {
            None => DataKind::Root,
            Some(CodeElement::DataDivisionHeader(_)) => DataKind::DataDivision,
            Some(CodeElement::DataSectionHeader(DataSectionHeader::WorkingStorage)) => {
                DataKind::WorkingStorageSection
            }
            Some(CodeElement::DataSectionHeader(DataSectionHeader::LocalStorage)) => {
                DataKind::LocalStorageSection
            }
            Some(CodeElement::DataSectionHeader(DataSectionHeader::Linkage)) => {
                DataKind::LinkageSection
            }
            Some(CodeElement::DataDescriptionEntry(_)) => DataKind::DataDescription,
            Some(CodeElement::DataConditionEntry(_)) => DataKind::DataCondition,
            Some(CodeElement::TypeDefinitionEntry(_)) => DataKind::TypeDescription,
        }
    }

    pub fn flags(&self) -> DataFlags {
        let mut flags = DataFlags::empty();
        if self.kind() == DataKind::LinkageSection {
            flags |= DataFlags::SHARED;
        }
        if self.strong {
            flags |= DataFlags::STRONG;
        }
        flags
    }

    pub fn is_shared(&self) -> bool {
        self.flags().contains(DataFlags::SHARED)
    }

    pub fn is_strong(&self) -> bool {
        self.flags().contains(DataFlags::STRONG)
    }
}

impl NodeKind for DataNode<'_> {
    fn identifier(&self) -> Option<&str> {
        match self.element?.definition() {
            Some(definition) => Some(definition.name),
            None => self.kind().literal_identifier(),
        }
    }

    fn payload(&self) -> Option<&dyn fmt::Display> {
        self.element.as_ref().map(|element| element as &dyn fmt::Display)
    }

    fn kind_name(&self) -> &'static str {
        self.kind().name()
    }
}
