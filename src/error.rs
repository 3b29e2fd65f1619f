//! Error types. Missing a key is never an error, only `None`.

use thiserror::Error;

/// Errors returned for calls that break a precondition of the tree's API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TreeError {
    /// [`Tree::try_remove`][crate::Tree::try_remove] was called without a key.
    #[error("the key to remove is absent")]
    MissingKey,
}

/// A broken structural invariant found by [`Tree::validate`][crate::Tree::validate].
///
/// Nodes are identified by their slot in the tree's node arena. Seeing one of these means the
/// tree is corrupt; there is nothing a caller can do to repair it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// The root node has a parent link.
    #[error("root node {root} has parent {parent}")]
    RootHasParent {
        /// Slot of the root node.
        root: usize,
        /// Slot the root claims as its parent.
        parent: usize,
    },
    /// A child's parent link doesn't point at the node holding it.
    #[error("node {child} is held by {holder} but its parent link is {recorded:?}")]
    ParentMismatch {
        /// Slot of the child node.
        child: usize,
        /// Slot of the node that holds `child` as a left or right child.
        holder: usize,
        /// Slot recorded in the child's parent link.
        recorded: Option<usize>,
    },
    /// A key sits on the wrong side of one of its ancestors.
    #[error("node {node} is out of order relative to ancestor {ancestor}")]
    OutOfOrder {
        /// Slot of the misplaced node.
        node: usize,
        /// Slot of the ancestor whose ordering it breaks.
        ancestor: usize,
    },
    /// A node is reachable along two different paths.
    #[error("node {node} is reachable more than once")]
    Revisited {
        /// Slot of the node reached twice.
        node: usize,
    },
    /// The stored length disagrees with the number of reachable nodes.
    #[error("tree records {recorded} entries but {reachable} are reachable")]
    LengthMismatch {
        /// The stored length.
        recorded: usize,
        /// The number of nodes reachable from the root.
        reachable: usize,
    },
}
