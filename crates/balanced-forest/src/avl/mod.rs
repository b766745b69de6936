//! Self-balancing binary search tree where the heights of the two child
//! subtrees of any node differ by at most one.

pub mod types;
pub mod util;

use crate::arena::Arena;
use crate::error::InvariantError;
use crate::strategy::{Strategy, Unlinked};

pub use types::{AvlNode, AvlNodeLike};

/// Height-balanced strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct Avl;

impl<K, V> Strategy<K, V> for Avl {
    type Node = AvlNode<K, V>;

    const NAME: &'static str = "avl";

    fn new_node(key: K, value: V) -> Self::Node {
        AvlNode::new(key, value)
    }

    fn after_insert(arena: &mut Arena<Self::Node>, root: u32, node: u32) -> u32 {
        util::after_insert(arena, root, node)
    }

    fn after_unlink(
        arena: &mut Arena<Self::Node>,
        root: Option<u32>,
        unlinked: &Unlinked<Self::Node>,
    ) -> Option<u32> {
        util::after_unlink(arena, root, unlinked)
    }

    fn validate(arena: &Arena<Self::Node>, root: Option<u32>) -> Result<(), InvariantError> {
        util::assert_avl_tree(arena, root)
    }

    fn describe(node: &Self::Node) -> String {
        format!("h={}", node.h)
    }
}
