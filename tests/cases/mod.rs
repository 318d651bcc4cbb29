#![allow(dead_code)]

use bumpalo::Bump;
use ddtree::{DataNodeRef, DataTree, NodeId, sample};

/// The sample data division, records allocated in `arena`.
pub fn sample_tree(arena: &Bump) -> DataTree<'_> {
    sample::data_division(arena).expect("sample tree builds")
}

/// Every node of the tree, in pre-order.
pub fn all_nodes<'t, 'a>(tree: &'t DataTree<'a>) -> Vec<DataNodeRef<'t, 'a>> {
    tree.root_ref().descendants().collect()
}

/// Identifiers of the children of `id`, in order.
pub fn child_identifiers<'t>(tree: &'t DataTree<'_>, id: NodeId) -> Vec<&'t str> {
    tree.get(id)
        .expect("node exists")
        .children()
        .filter_map(|child| child.identifier())
        .collect()
}

/// Address of the node at `query` in the sample tree, plus its payload text.
pub fn lookup(query: &str) -> Option<(String, String)> {
    let arena = Bump::new();
    let tree = sample_tree(&arena);
    let node = tree.root_ref().find(query)?;
    Some((node.address()?, node.to_string().lines().next()?.trim().to_string()))
}

/// Declare a test looking up `query` in the sample tree.
///
/// `found` is the expected address and first rendered line of the match,
/// or `None` when nothing should match.
#[macro_export]
macro_rules! lookup_case {
    {
        name: $name:ident,
        query: $query:expr,
        found: $found:expr $(,)?
    } => {
        #[test]
        fn $name() {
            let expected: Option<(&str, &str)> = $found;
            let actual = $crate::cases::lookup($query);
            pretty_assertions::assert_eq!(
                actual.as_ref().map(|(address, line)| (address.as_str(), line.as_str())),
                expected
            );
        }
    };
}
