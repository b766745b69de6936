//! The ordered map shared by every balancing strategy.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Write as _};
use std::marker::PhantomData;

use crate::arena::Arena;
use crate::avl::Avl;
use crate::bst::Unbalanced;
use crate::cursor::{Cursor, Iter, Keys, Values};
use crate::diagnostics::diag_warn;
use crate::error::{InvariantError, MergeError};
use crate::map::{self, NodeShape};
use crate::red_black::RedBlack;
use crate::strategy::{Strategy, Unlinked};
use crate::types::{KvNode, Node, Side};
use crate::util::{self, print::print_node};

/// Ordered key-value map over a binary search tree balanced by `S`.
///
/// Missing keys are reported with the tree's absent value rather than an
/// `Option`, and storing the absent value is a no-op. Nodes live in an arena
/// owned by the tree; parent links are indices, so they never keep a node
/// alive.
///
/// # Examples
/// ```
/// use balanced_forest::AvlTree;
///
/// let mut tree = AvlTree::new("");
/// assert!(tree.insert_or_update(2, "two"));
/// assert!(tree.insert_or_update(1, "one"));
/// assert!(!tree.insert_or_update(2, "deux"));
///
/// assert_eq!(*tree.find(&2), "deux");
/// assert_eq!(*tree.find(&3), "");
/// assert_eq!(tree.len(), 2);
///
/// assert!(tree.remove(&1));
/// assert!(!tree.remove(&1));
/// ```
pub struct Tree<K, V, S = Unbalanced>
where
    S: Strategy<K, V>,
{
    arena: Arena<S::Node>,
    root: Option<u32>,
    absent: V,
    _marker: PhantomData<(K, S)>,
}

/// Plain binary search tree, no rebalancing.
pub type BstTree<K, V> = Tree<K, V, Unbalanced>;
/// Height-balanced tree.
pub type AvlTree<K, V> = Tree<K, V, Avl>;
/// Color-balanced tree.
pub type RbTree<K, V> = Tree<K, V, RedBlack>;

impl<K, V, S> Tree<K, V, S>
where
    S: Strategy<K, V>,
{
    /// Empty tree answering `absent` for every missing key.
    pub fn new(absent: V) -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            absent,
            _marker: PhantomData,
        }
    }

    pub(crate) fn arena(&self) -> &Arena<S::Node> {
        &self.arena
    }

    pub(crate) fn arena_mut(&mut self) -> &mut Arena<S::Node> {
        &mut self.arena
    }

    pub(crate) fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn absent_value(&self) -> &V {
        &self.absent
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Edge count of the longest root-to-leaf path; -1 when empty.
    pub fn height(&self) -> i32 {
        util::height(&self.arena, self.root)
    }

    /// Drops every entry. The absent value stays, and cursors taken before
    /// the call read as end from now on.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// Smallest entry.
    pub fn first(&self) -> Option<(&K, &V)> {
        util::first(&self.arena, self.root).map(|i| self.entry(i))
    }

    /// Largest entry.
    pub fn last(&self) -> Option<(&K, &V)> {
        util::last(&self.arena, self.root).map(|i| self.entry(i))
    }

    pub(crate) fn entry(&self, idx: u32) -> (&K, &V) {
        let n = &self.arena[idx];
        (n.key(), n.value())
    }

    /// Cursor on the smallest entry, or end when empty.
    pub fn begin(&self) -> Cursor {
        Cursor::at(&self.arena, util::first(&self.arena, self.root))
    }

    /// Cursor on the root entry, or end when empty.
    pub fn root_cursor(&self) -> Cursor {
        Cursor::at(&self.arena, self.root)
    }

    pub fn end(&self) -> Cursor {
        Cursor::end()
    }

    /// In-order iterator over `(key, value)` pairs.
    pub fn iter(&self) -> Iter<'_, K, V, S> {
        Iter::new(self)
    }

    pub fn keys(&self) -> Keys<'_, K, V, S> {
        Keys { inner: self.iter() }
    }

    pub fn values(&self) -> Values<'_, K, V, S> {
        Values { inner: self.iter() }
    }

    fn breadth_first_indices(&self) -> Vec<u32> {
        util::breadth_first(&self.arena, self.root)
    }

    /// Entries level by level, left to right.
    pub fn breadth_first(&self) -> Vec<(&K, &V)> {
        self.breadth_first_indices()
            .into_iter()
            .map(|i| self.entry(i))
            .collect()
    }

    /// Position-only view of every node in breadth-first order; the basis of
    /// structural equality.
    pub fn shapes(&self) -> Vec<NodeShape<'_, K, V>> {
        self.breadth_first_indices()
            .into_iter()
            .map(|i| {
                let n = &self.arena[i];
                let parent = n.p().map(|p| {
                    let side = util::side_of(&self.arena, i).expect("child has a side");
                    (self.arena[p].key(), side)
                });
                NodeShape {
                    key: n.key(),
                    value: n.value(),
                    parent,
                }
            })
            .collect()
    }

    /// Empties the tree and hands back its entries in breadth-first order.
    pub fn drain_breadth_first(&mut self) -> Vec<(K, V)> {
        let order = self.breadth_first_indices();
        let out = order
            .into_iter()
            .map(|i| self.arena.remove(i).into_entry())
            .collect();
        self.clear();
        out
    }

    /// Breadth-first dump, one `key[:value]:parent[L|R]` or `key[:value]:ROOT`
    /// entry per node, joined by `/`.
    ///
    /// The `L` / `R` suffix only appears on an only child.
    ///
    /// # Examples
    /// ```
    /// use balanced_forest::BstTree;
    ///
    /// let mut tree = BstTree::new(0);
    /// for k in [5, 3, 8, 9] {
    ///     tree.insert_or_update(k, k * 10);
    /// }
    /// assert_eq!(tree.to_ordered_string(false), "5:ROOT/3:5/8:5/9:8R");
    /// assert_eq!(tree.to_ordered_string(true), "5:50:ROOT/3:30:5/8:80:5/9:90:8R");
    /// ```
    pub fn to_ordered_string(&self, include_values: bool) -> String
    where
        K: Display,
        V: Display,
    {
        let mut parts = Vec::with_capacity(self.len());
        for i in self.breadth_first_indices() {
            let n = &self.arena[i];
            let mut part = n.key().to_string();
            if include_values {
                let _ = write!(part, ":{}", n.value());
            }
            match n.p() {
                None => part.push_str(":ROOT"),
                Some(p) => {
                    let _ = write!(part, ":{}", self.arena[p].key());
                    if util::sibling(&self.arena, i).is_none() {
                        let side = util::side_of(&self.arena, i).expect("child has a side");
                        part.push(side.letter());
                    }
                }
            }
            parts.push(part);
        }
        parts.join("/")
    }

    /// Box-drawing dump with each node's balancing metadata.
    pub fn print(&self) -> String
    where
        K: Display,
        V: Display,
    {
        let head = format!("{} (size {})", S::NAME, self.len());
        match self.root {
            None => format!("{head}\n└─ ∅"),
            Some(root) => {
                let body = print_node::<K, V, _, _>(&self.arena, root, "   ", &S::describe);
                format!("{head}\n└─ {body}")
            }
        }
    }

    /// Compares in-order entries only, ignoring shape.
    pub fn entries_eq<S2>(&self, other: &Tree<K, V, S2>) -> bool
    where
        K: PartialEq,
        V: PartialEq,
        S2: Strategy<K, V>,
    {
        self.len() == other.len() && self.iter().eq(other.iter())
    }

    /// Unlinks `n`, which must have at most one child, and lets the strategy
    /// repair the tree.
    ///
    /// # Panics
    ///
    /// Panics if `n` has two children.
    fn unlink_single_childed_or_leaf(&mut self, n: u32) {
        let node = &self.arena[n];
        let (l, r) = (node.l(), node.r());
        assert!(
            l.is_none() || r.is_none(),
            "node {n} has two children and cannot be spliced out"
        );
        let parent = node.p();
        let side = util::side_of(&self.arena, n);
        let replacement = l.or(r);

        let root = self.root.expect("tree with a node has a root");
        self.root = util::replace_child(&mut self.arena, root, n, replacement);

        let node = self.arena.remove(n);
        let unlinked = Unlinked {
            node,
            parent,
            side,
            replacement,
        };
        self.root = S::after_unlink(&mut self.arena, self.root, &unlinked);
    }
}

impl<K, V, S> Tree<K, V, S>
where
    K: Ord,
    S: Strategy<K, V>,
{
    /// Builds a tree holding every key in `keys` mapped to `default`.
    ///
    /// Repeated keys are stored once. When `default` equals `absent` nothing
    /// is stored at all and a warning is logged.
    pub fn from_keys<I>(keys: I, default: V, absent: V) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Debug,
        V: Clone + PartialEq,
    {
        let mut tree = Self::new(absent);
        if default == tree.absent {
            diag_warn!("default value equals the absent value, building an empty tree");
            return tree;
        }
        for key in keys {
            if tree.contains_key(&key) {
                diag_warn!("duplicate key {:?} in bulk build", key);
            }
            tree.insert_or_update(key, default.clone());
        }
        tree
    }

    fn find_index(&self, key: &K) -> Option<u32> {
        util::find::<K, V, _>(&self.arena, self.root, key)
    }

    /// Stores `value` under `key`.
    ///
    /// Returns `true` when a node was created and `false` when an existing
    /// value was overwritten. Storing the absent value does nothing and
    /// returns `false`.
    pub fn insert_or_update(&mut self, key: K, value: V) -> bool
    where
        V: PartialEq,
    {
        if value == self.absent {
            return false;
        }

        let Some(mut curr) = self.root else {
            let idx = self.arena.insert(S::new_node(key, value));
            self.root = Some(S::after_insert(&mut self.arena, idx, idx));
            return true;
        };

        let side = loop {
            let side = match key.cmp(self.arena[curr].key()) {
                Ordering::Equal => {
                    self.arena[curr].set_value(value);
                    return false;
                }
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            match self.arena[curr].child(side) {
                Some(next) => curr = next,
                None => break side,
            }
        };

        let idx = self.arena.insert(S::new_node(key, value));
        util::set_child(&mut self.arena, curr, side, Some(idx));
        let root = self.root.expect("non-empty tree has a root");
        self.root = Some(S::after_insert(&mut self.arena, root, idx));
        true
    }

    /// Value stored under `key`, or the absent value.
    pub fn find(&self, key: &K) -> &V {
        self.get(key).unwrap_or(&self.absent)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.find_index(key).map(|i| self.arena[i].value())
    }

    /// Mutable access to a stored value.
    ///
    /// Writing the absent value through this reference leaves a node that
    /// reads like a missing key; prefer [`Tree::remove`].
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.find_index(key)?;
        Some(self.arena[idx].value_mut())
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find_index(key).is_some()
    }

    /// Entry with the greatest key less than or equal to `key`.
    pub fn get_or_next_lower(&self, key: &K) -> Option<(&K, &V)> {
        util::find_or_next_lower::<K, V, _>(&self.arena, self.root, key).map(|i| self.entry(i))
    }

    /// Cursor on `key`, or end when the key is missing.
    pub fn cursor_at(&self, key: &K) -> Cursor {
        Cursor::at(&self.arena, self.find_index(key))
    }

    /// Removes `key`. Returns `false` when it was not stored.
    ///
    /// A node with two children is never unlinked itself: it takes over the
    /// key and value of its in-order successor, and the successor node (which
    /// has at most one child) is unlinked instead.
    pub fn remove(&mut self, key: &K) -> bool {
        let Some(node) = self.find_index(key) else {
            return false;
        };

        let target = match (self.arena[node].l(), self.arena[node].r()) {
            (Some(_), Some(r)) => {
                let successor =
                    util::first(&self.arena, Some(r)).expect("right subtree is not empty");
                let (a, b) = self.arena.pair_mut(node, successor);
                a.swap_entry(b);
                successor
            }
            _ => node,
        };

        self.unlink_single_childed_or_leaf(target);
        true
    }

    /// Moves every entry of `source` into this tree and empties `source`.
    ///
    /// Fails without touching either tree when the absent values differ.
    /// Entries are re-inserted in `source`'s breadth-first order, so on a key
    /// collision the source value wins. The two trees may use different
    /// strategies.
    ///
    /// Merging a tree into itself cannot be expressed: both arguments are
    /// exclusive borrows.
    ///
    /// ```compile_fail
    /// use balanced_forest::AvlTree;
    ///
    /// let mut tree = AvlTree::new(0);
    /// tree.insert_or_update(1, 1);
    /// tree.merge(&mut tree);
    /// ```
    ///
    /// # Examples
    /// ```
    /// use balanced_forest::{AvlTree, RbTree};
    ///
    /// let mut dst = AvlTree::new(0);
    /// dst.insert_or_update(1, 10);
    /// let mut src = RbTree::new(0);
    /// src.insert_or_update(2, 20);
    ///
    /// assert!(dst.merge(&mut src));
    /// assert!(src.is_empty());
    /// assert_eq!(dst.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    /// ```
    pub fn merge<S2>(&mut self, source: &mut Tree<K, V, S2>) -> bool
    where
        V: PartialEq,
        S2: Strategy<K, V>,
    {
        map::merge(self, source)
    }

    /// [`Tree::merge`] reporting the number of moved entries, or why nothing
    /// moved.
    pub fn try_merge<S2>(&mut self, source: &mut Tree<K, V, S2>) -> Result<usize, MergeError>
    where
        V: PartialEq,
        S2: Strategy<K, V>,
    {
        map::try_merge(self, source)
    }

    /// Checks links, key order, size and the strategy's balancing invariants.
    pub fn validate(&self) -> Result<(), InvariantError> {
        util::assert_links_and_order::<K, V, _>(&self.arena, self.root)?;
        S::validate(&self.arena, self.root)
    }
}

impl<K, V, S> Default for Tree<K, V, S>
where
    V: Default,
    S: Strategy<K, V>,
{
    fn default() -> Self {
        Self::new(V::default())
    }
}

impl<K, V, S> Debug for Tree<K, V, S>
where
    K: Debug,
    V: Debug,
    S: Strategy<K, V>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S1, S2> PartialEq<Tree<K, V, S2>> for Tree<K, V, S1>
where
    K: PartialEq,
    V: PartialEq,
    S1: Strategy<K, V>,
    S2: Strategy<K, V>,
{
    /// Structural equality: same keys and values at the same relative
    /// positions. Heights and colors are ignored.
    fn eq(&self, other: &Tree<K, V, S2>) -> bool {
        self.shapes() == other.shapes()
    }
}

impl<'a, K, V, S> IntoIterator for &'a Tree<K, V, S>
where
    S: Strategy<K, V>,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
