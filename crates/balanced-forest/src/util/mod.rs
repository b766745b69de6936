//! Link-level helpers shared by every balancing strategy.
//!
//! Everything here works on the `p` / `l` / `r` shape only and never looks at
//! balancing metadata. Rotations live in [`rotate`], the text dump in
//! [`print`].

pub mod print;
pub mod rotate;

use std::cmp::Ordering;

use crate::arena::Arena;
use crate::error::InvariantError;
use crate::types::{KvNode, Node, Side};

pub use rotate::{rotate, rotate_left, rotate_right};

#[inline]
pub(crate) fn get_p<N: Node>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    arena[idx].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    arena[idx].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    arena[idx].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut Arena<N>, idx: u32, v: Option<u32>) {
    arena[idx].set_p(v);
}

/// Which side of its parent `idx` hangs on; `None` for the root.
pub fn side_of<N: Node>(arena: &Arena<N>, idx: u32) -> Option<Side> {
    let p = get_p(arena, idx)?;
    if get_l(arena, p) == Some(idx) {
        Some(Side::Left)
    } else if get_r(arena, p) == Some(idx) {
        Some(Side::Right)
    } else {
        panic!("node {idx} is not a child of its parent {p}");
    }
}

pub fn is_left_child<N: Node>(arena: &Arena<N>, idx: u32) -> bool {
    side_of(arena, idx) == Some(Side::Left)
}

pub fn is_right_child<N: Node>(arena: &Arena<N>, idx: u32) -> bool {
    side_of(arena, idx) == Some(Side::Right)
}

/// The parent's other child.
pub fn sibling<N: Node>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    let side = side_of(arena, idx)?;
    let p = get_p(arena, idx)?;
    arena[p].child(side.opposite())
}

pub fn grandparent<N: Node>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    get_p(arena, idx).and_then(|p| get_p(arena, p))
}

/// The grandparent's child that is not the parent.
pub fn uncle<N: Node>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    get_p(arena, idx).and_then(|p| sibling(arena, p))
}

/// Puts `child` into `parent`'s `side` slot and points `child` back at
/// `parent`. The previous occupant, if any, is decoupled from `parent`.
pub fn set_child<N: Node>(arena: &mut Arena<N>, parent: u32, side: Side, child: Option<u32>) {
    if let Some(old) = arena[parent].child(side) {
        if Some(old) != child && get_p(arena, old) == Some(parent) {
            set_p(arena, old, None);
        }
    }
    arena[parent].set_child_link(side, child);
    if let Some(c) = child {
        set_p(arena, c, Some(parent));
    }
}

/// Makes `new` take the place `old` occupies under `old`'s parent and returns
/// the (possibly changed) tree root. `old`'s own parent link is left alone.
pub fn replace_child<N: Node>(
    arena: &mut Arena<N>,
    root: u32,
    old: u32,
    new: Option<u32>,
) -> Option<u32> {
    match get_p(arena, old) {
        Some(p) => {
            let side = side_of(arena, old).expect("node with a parent has a side");
            arena[p].set_child_link(side, new);
            if let Some(n) = new {
                set_p(arena, n, Some(p));
            }
            Some(root)
        }
        None => {
            if let Some(n) = new {
                set_p(arena, n, None);
            }
            new
        }
    }
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &Arena<N>, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &Arena<N>, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: Node>(arena: &Arena<N>, mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &Arena<N>, mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return last(arena, Some(l));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Number of nodes reachable from `root`.
pub fn size<N: Node>(arena: &Arena<N>, root: Option<u32>) -> usize {
    breadth_first(arena, root).len()
}

/// Edge count of the longest downward path; -1 for an empty subtree.
pub fn height<N: Node>(arena: &Arena<N>, root: Option<u32>) -> i32 {
    let mut level: Vec<u32> = root.into_iter().collect();
    let mut h = -1;
    while !level.is_empty() {
        h += 1;
        level = level
            .into_iter()
            .flat_map(|i| [get_l(arena, i), get_r(arena, i)])
            .flatten()
            .collect();
    }
    h
}

/// Finds a node by key.
pub fn find<K, V, N>(arena: &Arena<N>, root: Option<u32>, key: &K) -> Option<u32>
where
    K: Ord,
    N: KvNode<K, V>,
{
    let mut curr = root;
    while let Some(i) = curr {
        curr = match key.cmp(arena[i].key()) {
            Ordering::Equal => return Some(i),
            Ordering::Less => get_l(arena, i),
            Ordering::Greater => get_r(arena, i),
        };
    }
    None
}

/// Finds node by key, or the next lower node if the exact key does not exist.
pub fn find_or_next_lower<K, V, N>(arena: &Arena<N>, root: Option<u32>, key: &K) -> Option<u32>
where
    K: Ord,
    N: KvNode<K, V>,
{
    let mut curr = root;
    let mut result = None;
    while let Some(i) = curr {
        match arena[i].key().cmp(key) {
            Ordering::Equal => return Some(i),
            Ordering::Greater => curr = get_l(arena, i),
            Ordering::Less => {
                result = Some(i);
                curr = get_r(arena, i);
            }
        }
    }
    result
}

/// Node indices level by level, left to right.
pub fn breadth_first<N: Node>(arena: &Arena<N>, root: Option<u32>) -> Vec<u32> {
    let mut out: Vec<u32> = root.into_iter().collect();
    let mut head = 0;
    while head < out.len() {
        let i = out[head];
        head += 1;
        out.extend(get_l(arena, i));
        out.extend(get_r(arena, i));
    }
    out
}

/// Checks parent links, the root's missing parent, key order and the node
/// count. Every strategy runs this before its own invariants.
pub fn assert_links_and_order<K, V, N>(
    arena: &Arena<N>,
    root: Option<u32>,
) -> Result<(), InvariantError>
where
    K: Ord,
    N: KvNode<K, V>,
{
    let Some(root) = root else {
        return if arena.is_empty() {
            Ok(())
        } else {
            Err(InvariantError::SizeMismatch { reported: arena.len(), reachable: 0 })
        };
    };

    if get_p(arena, root).is_some() {
        return Err(InvariantError::RootHasParent(root));
    }

    for i in breadth_first(arena, Some(root)) {
        for child in [get_l(arena, i), get_r(arena, i)].into_iter().flatten() {
            if get_p(arena, child) != Some(i) {
                return Err(InvariantError::BrokenParentLink { parent: i, child });
            }
        }
    }

    let reachable = size(arena, Some(root));
    if reachable != arena.len() {
        return Err(InvariantError::SizeMismatch { reported: arena.len(), reachable });
    }

    let mut curr = first(arena, Some(root));
    let mut prev_node: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(prev) = prev_node {
            if arena[prev].key() >= arena[i].key() {
                return Err(InvariantError::OrderViolated { prev, next: i });
            }
        }
        prev_node = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}
