/// A broken red-black or search-tree invariant, as reported by
/// [`RBTree::validate`](crate::RBTree::validate).
///
/// Node positions are given as arena indices. A correct tree never produces
/// one of these; seeing one means the structure has been corrupted.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum InvariantViolation {
    /// The root is red.
    #[error("root node is red")]
    RedRoot,

    /// The root points at a parent.
    #[error("root node has a parent link")]
    RootHasParent,

    /// A red node has a red child.
    #[error("red node {node} has a red child")]
    RedRed {
        /// Arena index of the parent of the pair.
        node: usize,
    },

    /// The two subtrees of a node disagree on their black-height.
    #[error("black-height mismatch below node {node}: left {left}, right {right}")]
    BlackHeight {
        /// Arena index of the node whose subtrees differ.
        node: usize,
        /// Black-height of the left subtree.
        left: usize,
        /// Black-height of the right subtree.
        right: usize,
    },

    /// In-order traversal is not strictly increasing.
    #[error("keys out of order at in-order position {position}")]
    OutOfOrder {
        /// Zero-based position of the first key not greater than its predecessor.
        position: usize,
    },

    /// A child does not point back at the node that holds it.
    #[error("node {node} does not link back to its parent")]
    BrokenParentLink {
        /// Arena index of the child.
        node: usize,
    },

    /// The recorded length disagrees with the number of reachable nodes.
    #[error("recorded length {recorded} but {reachable} nodes are reachable")]
    LengthMismatch {
        /// The length the tree reports.
        recorded: usize,
        /// Nodes actually reachable from the root.
        reachable: usize,
    },
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_messages() {
        assert_eq!(InvariantViolation::RedRoot.to_string(), "root node is red");
        assert_eq!(
            InvariantViolation::BlackHeight { node: 4, left: 2, right: 1 }.to_string(),
            "black-height mismatch below node 4: left 2, right 1"
        );
        assert_eq!(
            InvariantViolation::LengthMismatch { recorded: 3, reachable: 2 }.to_string(),
            "recorded length 3 but 2 nodes are reachable"
        );
    }
}
