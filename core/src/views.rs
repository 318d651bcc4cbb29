//! Strongly-typed views of data division nodes.
//!
//! Each view is a copy of a [`DataNodeRef`] that has been checked to be of a
//! given kind (or group of kinds), together with its payload record. The
//! capability declarations below say what a view's parent and children are
//! expected to be:
//!
//! | view                      | parent          | children          |
//! |---------------------------|-----------------|-------------------|
//! | [`RootNode`]              |                 | [`DataDivision`]  |
//! | [`DataDivision`]          | [`RootNode`]    | [`DataSection`]   |
//! | sections                  | [`DataDivision`]| [`DataDefinition`]|
//! | definitions               | [`DataSection`] |                   |
//! | [`DataDescription`]       | [`DataSection`] | [`DataDescription`]|
//! | [`TypeDescription`]       | [`DataSection`] | [`DataDescription`]|
//!
//! A nested data description (say level 05 under level 01) does not have a
//! section as parent: asking for its strong parent reports a type mismatch.

use crate::code_element::{
    DataConditionEntry, DataDefinitionEntry, DataDescriptionEntry, DataDivisionHeader,
    DataSectionHeader, TypeDefinitionEntry,
};
use crate::data_node::{DataKind, DataNode, DataNodeRef};
use ddtree_tree::{Narrow, StrongChildren, StrongParent};

/// Strongly-typed access to the payload record of a view.
pub trait EntryHolder<'a> {
    type Entry: ?Sized + 'a;

    /// This node's payload record, strongly-typed.
    fn entry(&self) -> &'a Self::Entry;
}

macro_rules! data_view {
    ($(#[$meta:meta])* $view:ident, $entry:ty, |$element:ident| $extract:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $view<'t, 'a> {
            node: DataNodeRef<'t, 'a>,
            entry: &'a $entry,
        }

        impl<'t, 'a> Narrow<'t, DataNode<'a>> for $view<'t, 'a> {
            const KIND: &'static str = stringify!($view);

            fn narrow(node: DataNodeRef<'t, 'a>) -> Option<Self> {
                let $element = node.kind().element()?;
                let entry = $extract?;
                Some(Self { node, entry })
            }

            fn node(&self) -> DataNodeRef<'t, 'a> {
                self.node
            }
        }

        impl<'t, 'a> EntryHolder<'a> for $view<'t, 'a> {
            type Entry = $entry;

            fn entry(&self) -> &'a $entry {
                self.entry
            }
        }

        impl<'t, 'a> $view<'t, 'a> {
            /// The node's address, see [`NodeRef::address`](ddtree_tree::NodeRef::address).
            pub fn address(&self) -> Option<String> {
                self.node.address()
            }
        }
    };
}

macro_rules! strong_parent {
    ($($view:ident => $parent:ident),* $(,)?) => {
        $(
            impl<'t, 'a> StrongParent<'t, DataNode<'a>> for $view<'t, 'a> {
                type Parent = $parent<'t, 'a>;
            }
        )*
    };
}

macro_rules! strong_children {
    ($($view:ident => $child:ident),* $(,)?) => {
        $(
            impl<'t, 'a> StrongChildren<'t, DataNode<'a>> for $view<'t, 'a> {
                type Child = $child<'t, 'a>;
            }
        )*
    };
}

macro_rules! definition_accessors {
    ($($view:ident),*) => {
        $(
            impl<'t, 'a> $view<'t, 'a> {
                pub fn name(&self) -> &'a str {
                    self.entry.definition().name
                }

                pub fn level(&self) -> u16 {
                    self.entry.definition().level
                }
            }
        )*
    };
}

macro_rules! section_accessors {
    ($($view:ident),*) => {
        $(
            impl<'t, 'a> $view<'t, 'a> {
                /// Whether this section's items are visible to external callers.
                pub fn is_shared(&self) -> bool {
                    self.node.kind().is_shared()
                }
            }
        )*
    };
}

/// The payload-less top of a data division tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootNode<'t, 'a> {
    node: DataNodeRef<'t, 'a>,
}

impl<'t, 'a> Narrow<'t, DataNode<'a>> for RootNode<'t, 'a> {
    const KIND: &'static str = "Root";

    fn narrow(node: DataNodeRef<'t, 'a>) -> Option<Self> {
        (node.kind().kind() == DataKind::Root).then_some(Self { node })
    }

    fn node(&self) -> DataNodeRef<'t, 'a> {
        self.node
    }
}

data_view!(DataDivision, DataDivisionHeader, |element| element.division());

data_view!(
    /// Any of the three sections.
    DataSection,
    DataSectionHeader,
    |element| element.section()
);

data_view!(WorkingStorageSection, DataSectionHeader, |element| element
    .section()
    .filter(|header| matches!(header, DataSectionHeader::WorkingStorage)));

data_view!(LocalStorageSection, DataSectionHeader, |element| element
    .section()
    .filter(|header| matches!(header, DataSectionHeader::LocalStorage)));

data_view!(LinkageSection, DataSectionHeader, |element| element
    .section()
    .filter(|header| matches!(header, DataSectionHeader::Linkage)));

data_view!(
    /// Any of the three definition kinds, seen through their common fields.
    DataDefinition,
    DataDefinitionEntry<'a>,
    |element| element.definition()
);

data_view!(DataDescription, DataDescriptionEntry<'a>, |element| element
    .description());

data_view!(DataCondition, DataConditionEntry<'a>, |element| element.condition());

data_view!(TypeDescription, TypeDefinitionEntry<'a>, |element| element
    .type_definition());

definition_accessors!(DataDefinition, DataDescription, DataCondition, TypeDescription);

section_accessors!(DataSection, WorkingStorageSection, LocalStorageSection, LinkageSection);

impl<'t, 'a> DataSection<'t, 'a> {
    /// Which of the three sections this is.
    pub fn section_kind(&self) -> DataKind {
        self.node.kind().kind()
    }
}

impl<'t, 'a> DataDescription<'t, 'a> {
    pub fn picture(&self) -> Option<&'a str> {
        self.entry.picture
    }
}

impl<'t, 'a> TypeDescription<'t, 'a> {
    /// Whether this type was declared strongly typed.
    ///
    /// Only the tree builder can produce a strongly typed description.
    pub fn is_strong(&self) -> bool {
        self.node.kind().is_strong()
    }

    pub fn size(&self) -> u32 {
        self.entry.size
    }
}

macro_rules! upcast {
    ($($from:ident => $to:ident via |$entry:ident| $convert:expr),* $(,)?) => {
        $(
            impl<'t, 'a> From<$from<'t, 'a>> for $to<'t, 'a> {
                fn from(view: $from<'t, 'a>) -> Self {
                    let $entry = view.entry;
                    Self {
                        node: view.node,
                        entry: $convert,
                    }
                }
            }
        )*
    };
}

upcast!(
    WorkingStorageSection => DataSection via |entry| entry,
    LocalStorageSection => DataSection via |entry| entry,
    LinkageSection => DataSection via |entry| entry,
    DataDescription => DataDefinition via |entry| entry.definition(),
    DataCondition => DataDefinition via |entry| entry.definition(),
    TypeDescription => DataDefinition via |entry| entry.definition(),
);

strong_parent!(
    DataDivision => RootNode,
    DataSection => DataDivision,
    WorkingStorageSection => DataDivision,
    LocalStorageSection => DataDivision,
    LinkageSection => DataDivision,
    DataDefinition => DataSection,
    DataDescription => DataSection,
    DataCondition => DataSection,
    TypeDescription => DataSection,
);

strong_children!(
    RootNode => DataDivision,
    DataDivision => DataSection,
    DataSection => DataDefinition,
    WorkingStorageSection => DataDefinition,
    LocalStorageSection => DataDefinition,
    LinkageSection => DataDefinition,
    DataDescription => DataDescription,
    TypeDescription => DataDescription,
);
