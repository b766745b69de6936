//! Unbalanced binary search tree: the shared core with no-op hooks.

pub mod types;

use crate::arena::Arena;
use crate::error::InvariantError;
use crate::strategy::{Strategy, Unlinked};

pub use types::BstNode;

/// Leaves the tree exactly as the BST core shaped it.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unbalanced;

impl<K, V> Strategy<K, V> for Unbalanced {
    type Node = BstNode<K, V>;

    const NAME: &'static str = "bst";

    fn new_node(key: K, value: V) -> Self::Node {
        BstNode::new(key, value)
    }

    fn after_insert(_arena: &mut Arena<Self::Node>, root: u32, _node: u32) -> u32 {
        root
    }

    fn after_unlink(
        _arena: &mut Arena<Self::Node>,
        root: Option<u32>,
        _unlinked: &Unlinked<Self::Node>,
    ) -> Option<u32> {
        root
    }

    fn validate(_arena: &Arena<Self::Node>, _root: Option<u32>) -> Result<(), InvariantError> {
        Ok(())
    }

    fn describe(_node: &Self::Node) -> String {
        String::new()
    }
}
