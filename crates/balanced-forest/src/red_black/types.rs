use crate::types::{impl_kv_node, Node};

/// Node color. Absent children count as black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// Node of a red-black tree.
#[derive(Clone, Debug)]
pub struct RbNode<K, V> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub v: V,
    pub c: Color,
}

impl<K, V> RbNode<K, V> {
    /// New nodes start red.
    pub fn new(k: K, v: V) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            v,
            c: Color::Red,
        }
    }
}

impl_kv_node!(RbNode);

/// Red-black specific node behavior.
pub trait RbNodeLike: Node {
    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);

    fn is_black(&self) -> bool {
        self.color() == Color::Black
    }
}

impl<K, V> RbNodeLike for RbNode<K, V> {
    fn color(&self) -> Color {
        self.c
    }

    fn set_color(&mut self, color: Color) {
        self.c = color;
    }
}
