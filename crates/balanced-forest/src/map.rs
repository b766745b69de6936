//! Strategy-agnostic map interface, merge and structural equality.
//!
//! Merge and equality only enumerate and re-insert entries, so any pair of
//! strategies works, including trait objects mixing all three.

use crate::diagnostics::diag_warn;
use crate::error::MergeError;
use crate::strategy::Strategy;
use crate::tree::Tree;
use crate::types::Side;

/// Where one node sits, independent of balancing metadata: its entry and,
/// unless it is the root, its parent's key and the side it hangs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeShape<'a, K, V> {
    pub key: &'a K,
    pub value: &'a V,
    pub parent: Option<(&'a K, Side)>,
}

/// Ordered map answering a sentinel "absent" value for missing keys.
///
/// # Examples
/// ```
/// use balanced_forest::{map, AvlTree, BstTree, RbTree, SentinelMap};
///
/// let mut trees: Vec<Box<dyn SentinelMap<i32, char>>> = vec![
///     Box::new(BstTree::new('-')),
///     Box::new(AvlTree::new('-')),
///     Box::new(RbTree::new('-')),
/// ];
/// for (i, tree) in trees.iter_mut().enumerate() {
///     tree.insert_or_update(i as i32, 'x');
/// }
///
/// let (head, tail) = trees.split_at_mut(1);
/// assert!(map::merge(&mut *head[0], &mut *tail[0]));
/// assert!(map::merge(&mut *head[0], &mut *tail[1]));
/// assert_eq!(head[0].len(), 3);
/// assert!(tail.iter().all(|t| t.is_empty()));
/// ```
pub trait SentinelMap<K, V> {
    fn absent_value(&self) -> &V;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` when a new entry was created.
    fn insert_or_update(&mut self, key: K, value: V) -> bool;

    fn remove(&mut self, key: &K) -> bool;

    /// Stored value or the absent value.
    fn find(&self, key: &K) -> &V;

    fn clear(&mut self);

    /// Every node's shape in breadth-first order.
    fn shapes(&self) -> Vec<NodeShape<'_, K, V>>;

    /// Empties the map, returning its entries in breadth-first order.
    fn drain_breadth_first(&mut self) -> Vec<(K, V)>;
}

impl<K, V, S> SentinelMap<K, V> for Tree<K, V, S>
where
    K: Ord,
    V: PartialEq,
    S: Strategy<K, V>,
{
    fn absent_value(&self) -> &V {
        Tree::absent_value(self)
    }

    fn len(&self) -> usize {
        Tree::len(self)
    }

    fn insert_or_update(&mut self, key: K, value: V) -> bool {
        Tree::insert_or_update(self, key, value)
    }

    fn remove(&mut self, key: &K) -> bool {
        Tree::remove(self, key)
    }

    fn find(&self, key: &K) -> &V {
        Tree::find(self, key)
    }

    fn clear(&mut self) {
        Tree::clear(self)
    }

    fn shapes(&self) -> Vec<NodeShape<'_, K, V>> {
        Tree::shapes(self)
    }

    fn drain_breadth_first(&mut self) -> Vec<(K, V)> {
        Tree::drain_breadth_first(self)
    }
}

/// Moves every entry of `source` into `destination`; see [`try_merge`].
/// Returns `false` when the absent values differ.
pub fn merge<K, V, D, S>(destination: &mut D, source: &mut S) -> bool
where
    V: PartialEq,
    D: SentinelMap<K, V> + ?Sized,
    S: SentinelMap<K, V> + ?Sized,
{
    try_merge(destination, source).is_ok()
}

/// Moves every entry of `source` into `destination` and empties `source`.
///
/// Nothing changes when the absent values differ. Entries are taken from a
/// breadth-first snapshot of `source` and re-inserted in that order; on a key
/// collision the source value overwrites the destination's. Returns the
/// number of moved entries.
pub fn try_merge<K, V, D, S>(destination: &mut D, source: &mut S) -> Result<usize, MergeError>
where
    V: PartialEq,
    D: SentinelMap<K, V> + ?Sized,
    S: SentinelMap<K, V> + ?Sized,
{
    if destination.absent_value() != source.absent_value() {
        diag_warn!("refusing to merge trees with different absent values");
        return Err(MergeError::IncompatibleSentinel);
    }
    if source.is_empty() {
        return Ok(0);
    }

    let entries = source.drain_breadth_first();
    let moved = entries.len();
    for (key, value) in entries {
        destination.insert_or_update(key, value);
    }
    Ok(moved)
}

/// Structural equality across any two maps: same entries at the same
/// relative positions.
pub fn structurally_equal<K, V, A, B>(a: &A, b: &B) -> bool
where
    K: PartialEq,
    V: PartialEq,
    A: SentinelMap<K, V> + ?Sized,
    B: SentinelMap<K, V> + ?Sized,
{
    a.shapes() == b.shapes()
}
