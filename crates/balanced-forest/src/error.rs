//! Error types.
//!
//! Expected misses (unknown key, empty tree) are reported through `bool`,
//! `Option` or the sentinel value; these types cover invariant validation and
//! the fallible form of merge.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantError {
    #[error("root node {0} has a parent")]
    RootHasParent(u32),
    #[error("node {child} does not point back at its parent {parent}")]
    BrokenParentLink { parent: u32, child: u32 },
    #[error("keys out of order between nodes {prev} and {next}")]
    OrderViolated { prev: u32, next: u32 },
    #[error("tree reports {reported} nodes but {reachable} are reachable from the root")]
    SizeMismatch { reported: usize, reachable: usize },
    #[error("stored height {stored} of node {node} differs from computed {computed}")]
    HeightMismatch { node: u32, stored: i32, computed: i32 },
    #[error("node {node} is out of balance by {balance}")]
    Unbalanced { node: u32, balance: i32 },
    #[error("root node {0} is red")]
    RedRoot(u32),
    #[error("red node {parent} has red child {child}")]
    RedRedViolation { parent: u32, child: u32 },
    #[error("black height below node {node} differs: left {left}, right {right}")]
    BlackHeightMismatch { node: u32, left: usize, right: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MergeError {
    #[error("source and destination use different absent values")]
    IncompatibleSentinel,
}
