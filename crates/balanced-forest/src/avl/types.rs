use crate::types::{impl_kv_node, Node};

/// Node of an AVL tree.
#[derive(Clone, Debug)]
pub struct AvlNode<K, V> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub v: V,
    /// Edge count of the longest path down to a leaf; a leaf has height 0.
    pub h: i32,
}

impl<K, V> AvlNode<K, V> {
    pub fn new(k: K, v: V) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            v,
            h: 0,
        }
    }
}

impl_kv_node!(AvlNode);

/// AVL-specific node behavior.
pub trait AvlNodeLike: Node {
    fn height(&self) -> i32;
    fn set_height(&mut self, h: i32);
}

impl<K, V> AvlNodeLike for AvlNode<K, V> {
    fn height(&self) -> i32 {
        self.h
    }

    fn set_height(&mut self, h: i32) {
        self.h = h;
    }
}
