//! Arena-backed ordered maps over binary search trees.
//!
//! One BST core ([`Tree`]) does the walking, linking and splicing; a
//! [`Strategy`] repairs the shape afterwards:
//!
//! | Strategy | Alias | Invariant |
//! |----------|-------|-----------|
//! | [`Unbalanced`] | [`BstTree`] | key order only |
//! | [`Avl`] | [`AvlTree`] | child heights differ by at most one |
//! | [`RedBlack`] | [`RbTree`] | red-black color rules |
//!
//! Every tree carries an *absent value*: lookups of missing keys return it,
//! and storing it is a no-op. Trees of any two strategies can be merged and
//! compared as long as they share key and value types; merging additionally
//! requires equal absent values.
//!
//! Nodes are addressed by `u32` arena indices instead of pointers, so parent
//! links are plain back-references and never keep a node alive.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`arena`] | slot storage with generation stamps |
//! | [`types`] | [`Node`] / [`KvNode`] link traits, [`Side`] |
//! | [`util`] | traversal, relations, rotations, text dump |
//! | [`bst`], [`avl`], [`red_black`] | node types and strategies |
//! | [`cursor`] | detached [`Cursor`] and borrowing iterators |
//! | [`map`] | [`SentinelMap`], merge, structural equality |
//! | [`diagnostics`] | process-wide warning switch |

pub mod arena;
pub mod avl;
pub mod bst;
pub mod cursor;
pub mod diagnostics;
pub mod error;
pub mod map;
pub mod red_black;
pub mod strategy;
pub mod tree;
pub mod types;
pub mod util;

pub use avl::Avl;
pub use bst::Unbalanced;
pub use cursor::{Cursor, Iter, Keys, Values};
pub use error::{InvariantError, MergeError};
pub use map::{NodeShape, SentinelMap};
pub use red_black::{Color, RedBlack};
pub use strategy::Strategy;
pub use tree::{AvlTree, BstTree, RbTree, Tree};
pub use types::{KvNode, Node, Side};
