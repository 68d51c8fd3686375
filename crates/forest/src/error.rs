use thiserror::Error;

/// Structural violation reported by
/// [`assert_red_black_tree`](crate::red_black::util::assert_red_black_tree).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("root {0} has a parent")]
    RootHasParent(u32),
    #[error("root {0} is not black")]
    RootNotBlack(u32),
    #[error("child {child} does not point back to parent {parent}")]
    BrokenParentLink { parent: u32, child: u32 },
    #[error("red node {0} has a red child")]
    RedRed(u32),
    #[error("black height mismatch under node {node}: left {left}, right {right}")]
    BlackHeight { node: u32, left: usize, right: usize },
    #[error("node {0} is out of order with its in-order predecessor")]
    OutOfOrder(u32),
}
