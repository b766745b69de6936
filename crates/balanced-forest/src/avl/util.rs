use crate::arena::Arena;
use crate::error::InvariantError;
use crate::strategy::Unlinked;
use crate::types::Side;
use crate::util::{breadth_first, get_p, rotate};

use super::types::AvlNodeLike;

/// Stored height of an optional node; an absent child counts as -1.
#[inline]
pub fn height<N: AvlNodeLike>(arena: &Arena<N>, n: Option<u32>) -> i32 {
    n.map_or(-1, |i| arena[i].height())
}

#[inline]
fn computed_height<N: AvlNodeLike>(arena: &Arena<N>, n: u32) -> i32 {
    1 + height(arena, arena[n].l()).max(height(arena, arena[n].r()))
}

/// Recomputes the height of `n` from its children. Returns whether it
/// changed.
fn update_height<N: AvlNodeLike>(arena: &mut Arena<N>, n: u32) -> bool {
    let h = computed_height(arena, n);
    let changed = arena[n].height() != h;
    arena[n].set_height(h);
    changed
}

/// `height(left) - height(right)`.
pub fn balance_factor<N: AvlNodeLike>(arena: &Arena<N>, n: u32) -> i32 {
    height(arena, arena[n].l()) - height(arena, arena[n].r())
}

pub fn is_balanced<N: AvlNodeLike>(arena: &Arena<N>, n: u32) -> bool {
    balance_factor(arena, n).abs() <= 1
}

/// Side of the taller child, `None` when both children are equally tall.
fn heavy_side<N: AvlNodeLike>(arena: &Arena<N>, n: u32) -> Option<Side> {
    match balance_factor(arena, n) {
        0 => None,
        bf if bf > 0 => Some(Side::Left),
        _ => Some(Side::Right),
    }
}

/// The taller child, or `None` when both children have the same height.
pub fn greater_height_child<N: AvlNodeLike>(arena: &Arena<N>, n: u32) -> Option<u32> {
    heavy_side(arena, n).and_then(|side| arena[n].child(side))
}

/// Rotates the subtree at `n` back into balance. Returns the tree root and
/// the new top of the subtree.
///
/// A child leaning away from its heavy parent gets rotated first (double
/// rotation); a child leaning the same way or not at all only needs the
/// single rotation of `n`.
fn restore_balance<N: AvlNodeLike>(arena: &mut Arena<N>, mut root: u32, n: u32) -> (u32, u32) {
    let side = heavy_side(arena, n).expect("unbalanced node has a heavier side");
    let child = arena[n]
        .child(side)
        .expect("heavier side of an unbalanced node is not empty");

    if heavy_side(arena, child) == Some(side.opposite()) {
        let inner = arena[child]
            .child(side.opposite())
            .expect("child leaning inward has an inner child");
        root = rotate(arena, root, child, side);
        update_height(arena, child);
        update_height(arena, inner);
    }

    let top = arena[n].child(side).expect("heavy child survives the inner rotation");
    root = rotate(arena, root, n, side.opposite());
    update_height(arena, n);
    update_height(arena, top);
    (root, top)
}

/// Walks from `start` to the root, fixing heights and rotating unbalanced
/// subtrees. Stops early once a balanced node keeps its height.
fn rebalance_from<N: AvlNodeLike>(arena: &mut Arena<N>, mut root: u32, start: Option<u32>) -> u32 {
    let mut curr = start;
    while let Some(n) = curr {
        if !is_balanced(arena, n) {
            let (new_root, top) = restore_balance(arena, root, n);
            root = new_root;
            curr = get_p(arena, top);
            continue;
        }
        if !update_height(arena, n) {
            break;
        }
        curr = get_p(arena, n);
    }
    root
}

pub fn after_insert<N: AvlNodeLike>(arena: &mut Arena<N>, root: u32, node: u32) -> u32 {
    let parent = get_p(arena, node);
    rebalance_from(arena, root, parent)
}

pub fn after_unlink<N: AvlNodeLike>(
    arena: &mut Arena<N>,
    root: Option<u32>,
    unlinked: &Unlinked<N>,
) -> Option<u32> {
    let root = root?;
    Some(rebalance_from(arena, root, unlinked.parent))
}

/// Checks stored heights and the height balance of every node.
pub fn assert_avl_tree<N: AvlNodeLike>(
    arena: &Arena<N>,
    root: Option<u32>,
) -> Result<(), InvariantError> {
    // Children come after their parent in breadth-first order, so walking it
    // backwards checks every subtree before the node above it.
    for n in breadth_first(arena, root).into_iter().rev() {
        let stored = arena[n].height();
        let computed = computed_height(arena, n);
        if stored != computed {
            return Err(InvariantError::HeightMismatch { node: n, stored, computed });
        }
        let balance = balance_factor(arena, n);
        if balance.abs() > 1 {
            return Err(InvariantError::Unbalanced { node: n, balance });
        }
    }
    Ok(())
}
