//! Node trait definitions.
//!
//! Each "pointer" is an `Option<u32>` index into the tree's [`Arena`]. Child
//! links own their subtrees (the arena only drops a node when the tree unlinks
//! it); the parent link is a plain back-reference used for upward walks.
//!
//! [`Arena`]: crate::arena::Arena

use std::mem;

/// Which child slot of its parent a node occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Suffix used by the ordered string dump.
    pub fn letter(self) -> char {
        match self {
            Side::Left => 'L',
            Side::Right => 'R',
        }
    }
}

/// Parent / left / right links.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);

    fn child(&self, side: Side) -> Option<u32> {
        match side {
            Side::Left => self.l(),
            Side::Right => self.r(),
        }
    }

    fn set_child_link(&mut self, side: Side, v: Option<u32>) {
        match side {
            Side::Left => self.set_l(v),
            Side::Right => self.set_r(v),
        }
    }
}

/// Key/value payload on top of the links.
pub trait KvNode<K, V>: Node {
    fn key(&self) -> &K;
    fn value(&self) -> &V;
    fn value_mut(&mut self) -> &mut V;
    fn set_value(&mut self, value: V);
    fn entry_mut(&mut self) -> (&mut K, &mut V);
    fn into_entry(self) -> (K, V);

    /// Exchanges key and value with `other`, leaving links and balancing
    /// metadata of both nodes where they are.
    fn swap_entry(&mut self, other: &mut Self)
    where
        Self: Sized,
    {
        let (k1, v1) = self.entry_mut();
        let (k2, v2) = other.entry_mut();
        mem::swap(k1, k2);
        mem::swap(v1, v2);
    }
}

/// Implements [`Node`] and [`KvNode`] for a struct with `p`, `l`, `r`, `k`
/// and `v` fields.
macro_rules! impl_kv_node {
    ($node:ident) => {
        impl<K, V> $crate::types::Node for $node<K, V> {
            fn p(&self) -> Option<u32> {
                self.p
            }

            fn l(&self) -> Option<u32> {
                self.l
            }

            fn r(&self) -> Option<u32> {
                self.r
            }

            fn set_p(&mut self, v: Option<u32>) {
                self.p = v;
            }

            fn set_l(&mut self, v: Option<u32>) {
                self.l = v;
            }

            fn set_r(&mut self, v: Option<u32>) {
                self.r = v;
            }
        }

        impl<K, V> $crate::types::KvNode<K, V> for $node<K, V> {
            fn key(&self) -> &K {
                &self.k
            }

            fn value(&self) -> &V {
                &self.v
            }

            fn value_mut(&mut self) -> &mut V {
                &mut self.v
            }

            fn set_value(&mut self, value: V) {
                self.v = value;
            }

            fn entry_mut(&mut self) -> (&mut K, &mut V) {
                (&mut self.k, &mut self.v)
            }

            fn into_entry(self) -> (K, V) {
                (self.k, self.v)
            }
        }
    };
}

pub(crate) use impl_kv_node;
