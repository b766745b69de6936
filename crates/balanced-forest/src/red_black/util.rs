use std::collections::HashMap;

use crate::arena::Arena;
use crate::error::InvariantError;
use crate::strategy::Unlinked;
use crate::types::Side;
use crate::util::{
    breadth_first, get_p, grandparent, is_left_child, is_right_child, rotate, side_of, uncle,
};

use super::types::{Color, RbNodeLike};

#[inline]
fn is_red<N: RbNodeLike>(arena: &Arena<N>, n: Option<u32>) -> bool {
    n.is_some_and(|i| arena[i].color() == Color::Red)
}

#[inline]
fn set_color<N: RbNodeLike>(arena: &mut Arena<N>, n: u32, color: Color) {
    arena[n].set_color(color);
}

/// Restores the color invariants after `n` was linked in as a red leaf.
///
/// A red uncle is handled by recoloring and moving two levels up; a black
/// (or missing) uncle ends the walk with one or two rotations.
pub fn after_insert<N: RbNodeLike>(arena: &mut Arena<N>, mut root: u32, mut n: u32) -> u32 {
    loop {
        let Some(p) = get_p(arena, n) else {
            break;
        };
        if !is_red(arena, Some(p)) {
            break;
        }
        // A red parent without a grandparent is the root; blackening it below
        // is enough.
        let Some(g) = grandparent(arena, n) else {
            break;
        };

        if let Some(u) = uncle(arena, n).filter(|&u| is_red(arena, Some(u))) {
            set_color(arena, p, Color::Black);
            set_color(arena, u, Color::Black);
            set_color(arena, g, Color::Red);
            n = g;
            continue;
        }

        let p_side = side_of(arena, p).expect("node below a grandparent has a side");
        let zig_zag = match p_side {
            Side::Left => is_right_child(arena, n),
            Side::Right => is_left_child(arena, n),
        };
        let mut top = p;
        if zig_zag {
            // zig-zag: turn it into zig-zig around the parent first
            root = rotate(arena, root, p, p_side);
            top = n;
        }
        set_color(arena, top, Color::Black);
        set_color(arena, g, Color::Red);
        root = rotate(arena, root, g, p_side.opposite());
        break;
    }

    set_color(arena, root, Color::Black);
    root
}

/// Resolves the missing black left behind when a black node was spliced out.
///
/// The deficient position is tracked as `(parent, side)` because it may be an
/// empty slot.
pub fn after_unlink<N: RbNodeLike>(
    arena: &mut Arena<N>,
    root: Option<u32>,
    unlinked: &Unlinked<N>,
) -> Option<u32> {
    let mut root = root?;
    if unlinked.node.color() == Color::Red {
        return Some(root);
    }
    if let Some(x) = unlinked.replacement.filter(|&x| is_red(arena, Some(x))) {
        set_color(arena, x, Color::Black);
        return Some(root);
    }

    let mut parent = unlinked.parent;
    let mut side = unlinked.side;
    while let (Some(p), Some(x_side)) = (parent, side) {
        let s_side = x_side.opposite();
        let mut s = arena[p]
            .child(s_side)
            .expect("a doubly black position always has a sibling");

        if is_red(arena, Some(s)) {
            set_color(arena, s, Color::Black);
            set_color(arena, p, Color::Red);
            root = rotate(arena, root, p, x_side);
            s = arena[p]
                .child(s_side)
                .expect("children of a red sibling are real nodes");
        }

        let near = arena[s].child(x_side);
        let far = arena[s].child(s_side);
        if !is_red(arena, near) && !is_red(arena, far) {
            set_color(arena, s, Color::Red);
            if is_red(arena, Some(p)) {
                set_color(arena, p, Color::Black);
                return Some(root);
            }
            side = side_of(arena, p);
            parent = get_p(arena, p);
            continue;
        }

        if !is_red(arena, far) {
            let near = near.expect("the red nephew is the near one");
            set_color(arena, near, Color::Black);
            set_color(arena, s, Color::Red);
            root = rotate(arena, root, s, s_side);
            s = near;
        }

        let far = arena[s].child(s_side).expect("far nephew is red");
        let parent_color = arena[p].color();
        set_color(arena, s, parent_color);
        set_color(arena, p, Color::Black);
        set_color(arena, far, Color::Black);
        root = rotate(arena, root, p, x_side);
        break;
    }

    set_color(arena, root, Color::Black);
    Some(root)
}

/// Black height below `root`, checking red-red adjacency and equal black
/// heights on the way up.
fn black_height<N: RbNodeLike>(arena: &Arena<N>, root: u32) -> Result<usize, InvariantError> {
    let mut heights: HashMap<u32, usize> = HashMap::new();
    let below =
        |heights: &HashMap<u32, usize>, child: Option<u32>| child.map_or(0, |c| heights[&c]);

    // Reverse breadth-first order visits every child before its parent.
    for node in breadth_first(arena, Some(root)).into_iter().rev() {
        let l = arena[node].l();
        let r = arena[node].r();

        if !arena[node].is_black() {
            for child in [l, r].into_iter().flatten() {
                if !arena[child].is_black() {
                    return Err(InvariantError::RedRedViolation { parent: node, child });
                }
            }
        }

        let left = below(&heights, l);
        let right = below(&heights, r);
        if left != right {
            return Err(InvariantError::BlackHeightMismatch { node, left, right });
        }
        heights.insert(node, left + usize::from(arena[node].is_black()));
    }

    Ok(heights[&root])
}

/// Checks the root color, red-red adjacency and equal black heights.
pub fn assert_red_black_tree<N: RbNodeLike>(
    arena: &Arena<N>,
    root: Option<u32>,
) -> Result<(), InvariantError> {
    let Some(root) = root else {
        return Ok(());
    };

    if !arena[root].is_black() {
        return Err(InvariantError::RedRoot(root));
    }

    black_height(arena, root).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::red_black::RbNode;
    use crate::types::Side;
    use crate::util::set_child;

    fn node(arena: &mut Arena<RbNode<i32, ()>>, k: i32, c: Color) -> u32 {
        let i = arena.insert(RbNode::new(k, ()));
        arena[i].c = c;
        i
    }

    #[test]
    fn red_uncle_recolors() {
        let mut arena = Arena::new();
        let g = node(&mut arena, 10, Color::Black);
        let p = node(&mut arena, 5, Color::Red);
        let u = node(&mut arena, 15, Color::Red);
        let n = node(&mut arena, 1, Color::Red);
        set_child(&mut arena, g, Side::Left, Some(p));
        set_child(&mut arena, g, Side::Right, Some(u));
        set_child(&mut arena, p, Side::Left, Some(n));

        let root = after_insert(&mut arena, g, n);
        assert_eq!(root, g);
        assert_eq!(arena[g].c, Color::Black);
        assert_eq!((arena[p].c, arena[u].c, arena[n].c), (Color::Black, Color::Black, Color::Red));
        assert_eq!(assert_red_black_tree(&arena, Some(root)), Ok(()));
    }

    #[test]
    fn zig_zag_rotates_twice() {
        let mut arena = Arena::new();
        let g = node(&mut arena, 10, Color::Black);
        let p = node(&mut arena, 5, Color::Red);
        let n = node(&mut arena, 7, Color::Red);
        set_child(&mut arena, g, Side::Left, Some(p));
        set_child(&mut arena, p, Side::Right, Some(n));

        let root = after_insert(&mut arena, g, n);
        assert_eq!(root, n);
        assert_eq!(arena[n].l, Some(p));
        assert_eq!(arena[n].r, Some(g));
        assert_eq!((arena[n].c, arena[p].c, arena[g].c), (Color::Black, Color::Red, Color::Red));
        assert_eq!(assert_red_black_tree(&arena, Some(root)), Ok(()));
    }

    #[test]
    fn detects_red_red_and_black_height() {
        let mut arena = Arena::new();
        let a = node(&mut arena, 2, Color::Black);
        let b = node(&mut arena, 1, Color::Red);
        let c = node(&mut arena, 0, Color::Red);
        set_child(&mut arena, a, Side::Left, Some(b));
        set_child(&mut arena, b, Side::Left, Some(c));
        assert_eq!(
            assert_red_black_tree(&arena, Some(a)),
            Err(InvariantError::RedRedViolation { parent: b, child: c })
        );

        arena[c].c = Color::Black;
        arena[b].c = Color::Black;
        assert!(matches!(
            assert_red_black_tree(&arena, Some(a)),
            Err(InvariantError::BlackHeightMismatch { .. })
        ));
    }
}
