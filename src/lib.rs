//! ddtree - The data division of a program as a navigable tree
//!
//! # Overview
//!
//! A data division is a tree: a division holds sections, sections hold
//! level-numbered definitions, and definitions nest by level. This crate
//! stores such a tree generically and gives it back strongly typed.
//!
//! # Quick Start
//!
//! ```
//! use bumpalo::Bump;
//! use ddtree::{StrongChildren, TypeDescription, sample};
//!
//! let arena = Bump::new();
//! let tree = sample::data_division(&arena).unwrap();
//!
//! let point = tree
//!     .root_ref()
//!     .find_as::<TypeDescription<'_, '_>>("POINT2D")
//!     .unwrap();
//! let fields: Vec<_> = point
//!     .strong_children()
//!     .unwrap()
//!     .iter()
//!     .map(|field| field.name())
//!     .collect();
//! assert_eq!(fields, ["x", "y"]);
//! ```
//!
//! # Crates
//!
//! - [`ddtree_tree`]: the generic tree (storage, addressing, search,
//!   printing, typed views, cursor). Usable with any node kind.
//! - [`ddtree_core`]: data division node kinds, records, views and builder.

pub use ddtree_core::*;
pub use ddtree_tree::{
    ADDRESS_SEPARATOR, Cursor, Descendants, Tree, TreeFormatter, TreeVisitor, narrow_all,
};
