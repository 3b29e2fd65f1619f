use crate::node::NodeId;

/// Which of a parent's two child slots a node occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// The shape of a node that's about to be removed. Each shape is unlinked differently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Shape {
    /// No children. The node is simply cut off from its parent.
    Leaf,
    /// Exactly one child which takes the node's place.
    OnlyChild(NodeId),
    /// Both children. The node's inorder successor takes its place.
    TwoChildren { left: NodeId, right: NodeId },
}
