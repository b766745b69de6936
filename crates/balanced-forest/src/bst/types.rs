use crate::types::impl_kv_node;

/// Node of a plain binary search tree: links and payload, no balancing
/// metadata.
#[derive(Clone, Debug)]
pub struct BstNode<K, V> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub v: V,
}

impl<K, V> BstNode<K, V> {
    pub fn new(k: K, v: V) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            v,
        }
    }
}

impl_kv_node!(BstNode);
