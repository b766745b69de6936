//! Self-balancing binary search tree that uses a color bit to ensure that the
//! tree remains approximately balanced during insertions and deletions.

pub mod types;
pub mod util;

use crate::arena::Arena;
use crate::error::InvariantError;
use crate::strategy::{Strategy, Unlinked};

pub use types::{Color, RbNode, RbNodeLike};

/// Color-balanced strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct RedBlack;

impl<K, V> Strategy<K, V> for RedBlack {
    type Node = RbNode<K, V>;

    const NAME: &'static str = "red-black";

    fn new_node(key: K, value: V) -> Self::Node {
        RbNode::new(key, value)
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
        util::assert_red_black_tree(arena, root)
    }

    fn describe(node: &Self::Node) -> String {
        match node.c {
            Color::Red => "red".to_string(),
            Color::Black => "black".to_string(),
        }
    }
}
