//! A small, fixed data division used by the demo and the tests.
//!
//! ```text
//! DATA DIVISION.
//! WORKING-STORAGE SECTION.
//! 01 POINT2D TYPEDEF.        (2 fields)
//!    02 x.
//!    02 y.
//! LINKAGE SECTION.
//! 01 x.
//!    05 a.
//!       10 b.
//!    05 c.
//! 01 y.
//! 01 z.
//! 88 b.
//! 88 c.
//! 01 POINT3D TYPEDEF.        (3 fields)
//!    02 x.
//!    02 y.
//!    02 z.
//! ```

use crate::builder::DataTreeBuilder;
use crate::code_element::{
    DataConditionEntry, DataDescriptionEntry, DataDivisionHeader, DataSectionHeader,
    TypeDefinitionEntry,
};
use crate::data_node::{DataNode, DataTree};
use bumpalo::Bump;
use ddtree_tree::TreeError;

/// Build the sample data division, with its records allocated in `arena`.
pub fn data_division<'a>(arena: &'a Bump) -> Result<DataTree<'a>, TreeError> {
    let description = |name: &'a str, level: u16| {
        DataNode::description(arena.alloc(DataDescriptionEntry::new(name, level)))
    };
    let condition = |name: &'a str, level: u16| {
        DataNode::condition(arena.alloc(DataConditionEntry::new(name, level)))
    };
    let typedef = |name: &'a str, size: u32| {
        DataNode::type_description(arena.alloc(TypeDefinitionEntry::new(name, 1, size)))
    };

    let mut b = DataTreeBuilder::new();
    b.enter(DataNode::division(arena.alloc(DataDivisionHeader)))?;

    b.enter(DataNode::section(arena.alloc(DataSectionHeader::WorkingStorage)))?;
    b.enter(typedef("POINT2D", 2))?;
    b.leaf(description("x", 2))?;
    b.leaf(description("y", 2))?;
    b.exit()?;
    b.exit()?;

    b.enter(DataNode::section(arena.alloc(DataSectionHeader::Linkage)))?;
    b.enter(description("x", 1))?;
    b.enter(description("a", 5))?;
    b.leaf(description("b", 10))?;
    b.exit()?;
    b.leaf(description("c", 5))?;
    b.exit()?;
    b.leaf(description("y", 1))?;
    b.leaf(description("z", 1))?;
    b.leaf(condition("b", 88))?;
    b.leaf(condition("c", 88))?;
    b.enter(typedef("POINT3D", 3))?;
    b.leaf(description("x", 2))?;
    b.leaf(description("y", 2))?;
    b.leaf(description("z", 2))?;
    b.exit()?;
    b.exit()?;

    b.exit()?;
    Ok(b.finish())
}
