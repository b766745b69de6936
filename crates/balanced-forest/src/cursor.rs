//! In-order traversal.
//!
//! [`Cursor`] is a detached position: it does not borrow the tree, so the
//! tree can be mutated while a cursor is held, and every read or write goes
//! back through the tree. [`Iter`] is the ordinary borrowing iterator.

use std::iter::FusedIterator;

use crate::arena::Arena;
use crate::strategy::Strategy;
use crate::tree::Tree;
use crate::types::KvNode;
use crate::util;

/// Position of one node in a tree, or the end of the sequence.
///
/// A cursor remembers the node's slot and the generation of the allocation in
/// it. Once that node is removed (or the tree cleared) the cursor reads as
/// end, even if the slot is reused by a later insert.
///
/// # Examples
/// ```
/// use balanced_forest::RbTree;
///
/// let mut tree = RbTree::new(0);
/// for k in [3, 1, 2] {
///     tree.insert_or_update(k, k * 10);
/// }
///
/// let mut cursor = tree.begin();
/// let mut keys = Vec::new();
/// while let Some(k) = cursor.key(&tree) {
///     keys.push(*k);
///     cursor.move_next(&tree);
/// }
/// assert_eq!(keys, vec![1, 2, 3]);
/// assert_eq!(*cursor.value(&tree), 0);
///
/// let two = tree.cursor_at(&2);
/// assert!(two.set_value(&mut tree, 25));
/// assert_eq!(*tree.find(&2), 25);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    node: Option<(u32, u64)>,
}

impl Cursor {
    pub(crate) fn at<N>(arena: &Arena<N>, idx: Option<u32>) -> Self {
        let node = idx.and_then(|i| arena.generation(i).map(|g| (i, g)));
        Self { node }
    }

    /// The past-the-end position.
    pub fn end() -> Self {
        Self { node: None }
    }

    /// Slot index of the referenced node if it is still alive in `tree`.
    fn resolve<K, V, S>(&self, tree: &Tree<K, V, S>) -> Option<u32>
    where
        S: Strategy<K, V>,
    {
        let (idx, generation) = self.node?;
        tree.arena().is_live(idx, generation).then_some(idx)
    }

    /// Whether the cursor is past the end, including when its node is gone.
    pub fn is_end<K, V, S>(&self, tree: &Tree<K, V, S>) -> bool
    where
        S: Strategy<K, V>,
    {
        self.resolve(tree).is_none()
    }

    pub fn key<'a, K, V, S>(&self, tree: &'a Tree<K, V, S>) -> Option<&'a K>
    where
        S: Strategy<K, V>,
    {
        self.resolve(tree).map(|i| tree.arena()[i].key())
    }

    /// The referenced value, or the tree's absent value at the end.
    pub fn value<'a, K, V, S>(&self, tree: &'a Tree<K, V, S>) -> &'a V
    where
        S: Strategy<K, V>,
    {
        match self.resolve(tree) {
            Some(i) => tree.arena()[i].value(),
            None => tree.absent_value(),
        }
    }

    pub fn entry<'a, K, V, S>(&self, tree: &'a Tree<K, V, S>) -> Option<(&'a K, &'a V)>
    where
        S: Strategy<K, V>,
    {
        self.resolve(tree).map(|i| tree.entry(i))
    }

    /// Steps to the in-order successor. Returns whether the cursor is on a
    /// node afterwards; stepping from the end stays at the end.
    pub fn move_next<K, V, S>(&mut self, tree: &Tree<K, V, S>) -> bool
    where
        S: Strategy<K, V>,
    {
        let next = self.resolve(tree).and_then(|i| util::next(tree.arena(), i));
        *self = Cursor::at(tree.arena(), next);
        self.node.is_some()
    }

    /// Overwrites the referenced value in place.
    ///
    /// Returns `false` at the end, and for the absent value, which is never
    /// stored.
    pub fn set_value<K, V, S>(&self, tree: &mut Tree<K, V, S>, value: V) -> bool
    where
        V: PartialEq,
        S: Strategy<K, V>,
    {
        if value == *tree.absent_value() {
            return false;
        }
        match self.resolve(tree) {
            Some(i) => {
                tree.arena_mut()[i].set_value(value);
                true
            }
            None => false,
        }
    }
}

/// In-order iterator over a [`Tree`].
pub struct Iter<'a, K, V, S>
where
    S: Strategy<K, V>,
{
    tree: &'a Tree<K, V, S>,
    next: Option<u32>,
    remaining: usize,
}

impl<'a, K, V, S> Iter<'a, K, V, S>
where
    S: Strategy<K, V>,
{
    pub(crate) fn new(tree: &'a Tree<K, V, S>) -> Self {
        Self {
            tree,
            next: util::first(tree.arena(), tree.root_index()),
            remaining: tree.len(),
        }
    }
}

impl<'a, K, V, S> Iterator for Iter<'a, K, V, S>
where
    S: Strategy<K, V>,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.next?;
        self.next = util::next(self.tree.arena(), i);
        self.remaining -= 1;
        Some(self.tree.entry(i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V, S> ExactSizeIterator for Iter<'_, K, V, S> where S: Strategy<K, V> {}

impl<K, V, S> FusedIterator for Iter<'_, K, V, S> where S: Strategy<K, V> {}

/// In-order iterator over the keys of a [`Tree`].
pub struct Keys<'a, K, V, S>
where
    S: Strategy<K, V>,
{
    pub(crate) inner: Iter<'a, K, V, S>,
}

impl<'a, K, V, S> Iterator for Keys<'a, K, V, S>
where
    S: Strategy<K, V>,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// In-order iterator over the values of a [`Tree`].
pub struct Values<'a, K, V, S>
where
    S: Strategy<K, V>,
{
    pub(crate) inner: Iter<'a, K, V, S>,
}

impl<'a, K, V, S> Iterator for Values<'a, K, V, S>
where
    S: Strategy<K, V>,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
