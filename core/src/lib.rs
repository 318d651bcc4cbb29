//! The data division of a program, as a tree.
//!
//! Nodes are stored in a generic [`ddtree_tree::Tree`]; this crate supplies
//! the node kinds ([`DataNode`]), their payload records
//! ([`code_element`]), the typed views with their parent/children
//! declarations ([`views`]) and a builder for top-down construction.

pub mod builder;
pub mod code_element;
pub mod data_node;
pub mod sample;
pub mod views;

pub use builder::DataTreeBuilder;
pub use code_element::{
    CodeElement, DataConditionEntry, DataDefinitionEntry, DataDescriptionEntry,
    DataDivisionHeader, DataSectionHeader, TypeDefinitionEntry,
};
pub use data_node::{DataFlags, DataKind, DataNode, DataNodeRef, DataTree};
pub use views::{
    DataCondition, DataDefinition, DataDescription, DataDivision, DataSection, EntryHolder,
    LinkageSection, LocalStorageSection, RootNode, TypeDescription, WorkingStorageSection,
};

pub use ddtree_tree::{Narrow, NodeId, NodeKind, NodeRef, StrongChildren, StrongParent, TreeError};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    ///
    /// Output is captured by the test harness; run with `--nocapture` to
    /// see it.
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
