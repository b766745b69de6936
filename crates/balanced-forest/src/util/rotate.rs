use crate::arena::Arena;
use crate::types::{Node, Side};

use super::{get_p, replace_child, set_child};

/// Rotates `n` down towards `side`: its child on the opposite side moves up
/// into `n`'s place and `n` becomes that child's `side` child.
///
/// Returns the tree root afterwards, which changes only when `n` was the root.
///
/// # Panics
///
/// Panics if `n` has no child on the opposite side.
pub fn rotate<N: Node>(arena: &mut Arena<N>, root: u32, n: u32, side: Side) -> u32 {
    let up = arena[n]
        .child(side.opposite())
        .unwrap_or_else(|| panic!("rotation of node {n} needs a {:?} child", side.opposite()));
    let inner = arena[up].child(side);

    let root = replace_child(arena, root, n, Some(up)).expect("rotated subtree has a root");
    set_child(arena, n, side.opposite(), inner);
    set_child(arena, up, side, Some(n));
    debug_assert_eq!(get_p(arena, n), Some(up));
    root
}

/// Right child moves up.
pub fn rotate_left<N: Node>(arena: &mut Arena<N>, root: u32, n: u32) -> u32 {
    rotate(arena, root, n, Side::Left)
}

/// Left child moves up.
pub fn rotate_right<N: Node>(arena: &mut Arena<N>, root: u32, n: u32) -> u32 {
    rotate(arena, root, n, Side::Right)
}
