//! Generic, homogeneously-stored tree with strongly-typed views.
//!
//! Every node lives in a single arena owned by [`Tree`] and carries a
//! kind value supplied by the caller (see [`NodeKind`]). The tree itself
//! only knows how to link, address, search and print nodes; callers that
//! know more about the local shape of the tree recover typed handles with
//! the [`Narrow`], [`StrongParent`] and [`StrongChildren`] adapters.
//!
//! # Example
//!
//! ```
//! use core::fmt;
//! use ddtree_tree::{NodeKind, Tree};
//!
//! #[derive(Debug)]
//! struct Named(&'static str);
//!
//! impl NodeKind for Named {
//!     fn identifier(&self) -> Option<&str> {
//!         Some(self.0)
//!     }
//!
//!     fn payload(&self) -> Option<&dyn fmt::Display> {
//!         None
//!     }
//!
//!     fn kind_name(&self) -> &'static str {
//!         "Named"
//!     }
//! }
//!
//! let mut tree = Tree::new(Named("a"));
//! let b = tree.create(Named("b"));
//! tree.insert(tree.root(), b).unwrap();
//!
//! assert_eq!(tree.address(b).as_deref(), Some("a.b"));
//! assert_eq!(tree.find(tree.root(), "b"), Some(b));
//! ```

#![no_std]
extern crate alloc;
#[cfg(test)]
extern crate std;

pub mod cursor;
pub mod display;
pub mod error;
pub mod node;
pub mod tree;
pub mod view;
pub mod visit;

pub use cursor::Cursor;
pub use display::TreeFormatter;
pub use error::TreeError;
pub use node::{NodeId, NodeKind, NodeRef};
pub use tree::{ADDRESS_SEPARATOR, Tree};
pub use view::{Narrow, StrongChildren, StrongParent, narrow_all};
pub use visit::{Descendants, TreeVisitor};
