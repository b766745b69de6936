//! Balancing hooks the shared BST core calls after every structural change.

use crate::arena::Arena;
use crate::error::InvariantError;
use crate::types::{KvNode, Side};

/// A node that has just been spliced out of the tree.
///
/// `parent` and `side` describe the slot the node used to occupy;
/// `replacement` is the child (if any) that now sits in that slot.
pub struct Unlinked<N> {
    pub node: N,
    pub parent: Option<u32>,
    pub side: Option<Side>,
    pub replacement: Option<u32>,
}

/// Balancing strategy of a [`Tree`](crate::Tree).
///
/// The core does the plain BST work (walk, link, splice) and hands the tree
/// to the strategy afterwards; the strategy may rotate and must return the
/// resulting root.
pub trait Strategy<K, V> {
    type Node: KvNode<K, V>;

    /// Short name shown in debug output.
    const NAME: &'static str;

    fn new_node(key: K, value: V) -> Self::Node;

    /// Called after `node` was linked as a new leaf (or became the root of an
    /// empty tree).
    fn after_insert(arena: &mut Arena<Self::Node>, root: u32, node: u32) -> u32;

    /// Called after a node with at most one child was spliced out and
    /// removed from the arena.
    fn after_unlink(
        arena: &mut Arena<Self::Node>,
        root: Option<u32>,
        unlinked: &Unlinked<Self::Node>,
    ) -> Option<u32>;

    /// Checks the strategy's own invariants; links, order and size are
    /// checked by the caller.
    fn validate(arena: &Arena<Self::Node>, root: Option<u32>) -> Result<(), InvariantError>;

    /// Balancing metadata of one node for debug dumps; empty when there is
    /// none.
    fn describe(node: &Self::Node) -> String;
}
