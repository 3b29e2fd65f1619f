//! Removing keys from a [`Tree`].
//!
//! Removing a node means fixing up three kinds of links: the parent's child slot (or the tree's
//! root), the parent links of whatever takes the node's place, and the child slots of that
//! replacement. Every case below boils down to one or two calls to `transplant` plus
//! explicitly reattaching children.

use crate::error::TreeError;
use crate::node::NodeId;
use crate::tree::Tree;
use crate::util::{Shape, Side};

impl<K, V> Tree<K, V> {
    /// Removes the node containing the given key from the tree and returns its value. If the
    /// tree does not contain a node with the key, nothing happens and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.remove(&42), None);
    /// assert_eq!(tree.remove(&1), Some(2));
    /// assert_eq!(tree.get(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V>
    where
        K: Ord,
    {
        let Some(target) = self.find_node(key) else {
            trace_log!(len = self.len(), "remove missed");
            return None;
        };

        match self.shape(target) {
            Shape::Leaf => {
                debug_log!(node = ?target, "removing leaf");
                self.remove_leaf(target);
            }
            Shape::OnlyChild(child) => {
                debug_log!(node = ?target, child = ?child, "removing node with one child");
                self.replace_with_child(target, child);
            }
            Shape::TwoChildren { left, right } => {
                debug_log!(node = ?target, "removing node with two children");
                self.replace_with_successor(target, left, right);
            }
        }

        self.decrement_len();
        let removed = self.arena.release(target);

        // In tests, after unlinking, assert that we've kept every structural invariant.
        if cfg!(test) {
            if let Err(violation) = self.validate() {
                panic!("remove broke the tree: {violation}");
            }
        }

        Some(removed.value)
    }

    /// Like [`Tree::remove`] but for callers whose key might be absent, e.g. one parsed from
    /// user input. A missing key is rejected before the tree is searched or changed.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingKey`] if `key` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.try_remove(None), Err(TreeError::MissingKey));
    /// assert_eq!(tree.len(), 1);
    ///
    /// assert_eq!(tree.try_remove(Some(&42)), Ok(None));
    /// assert_eq!(tree.try_remove(Some(&1)), Ok(Some(2)));
    /// ```
    pub fn try_remove(&mut self, key: Option<&K>) -> Result<Option<V>, TreeError>
    where
        K: Ord,
    {
        let key = key.ok_or(TreeError::MissingKey)?;
        Ok(self.remove(key))
    }

    fn shape(&self, id: NodeId) -> Shape {
        let node = self.node(id);
        if node.is_leaf() {
            return Shape::Leaf;
        }
        match (node.left, node.right) {
            (Some(left), Some(right)) => Shape::TwoChildren { left, right },
            (Some(child), None) | (None, Some(child)) => Shape::OnlyChild(child),
            (None, None) => unreachable!("leaf was handled above"),
        }
    }

    /// Cuts a childless node off from its parent, or empties the tree if it was the root.
    ///
    /// ```text
    ///       2              2
    ///      / \     ->     /
    ///     1   3          1
    /// ```
    fn remove_leaf(&mut self, node: NodeId) {
        self.transplant(node, None);
        self.arena.get_mut(node).parent = None;
    }

    /// Splices a node's only child into its place.
    ///
    /// ```text
    ///       4              4
    ///      / \            / \
    ///     2   5   ->     1   5
    ///    /
    ///   1
    /// ```
    fn replace_with_child(&mut self, node: NodeId, child: NodeId) {
        self.transplant(node, Some(child));
    }

    /// Replaces a node that has two children with its inorder successor, the leftmost node of
    /// its right subtree. The successor has no left child, so if it sits deeper than `right`
    /// its own right child can take its old slot.
    ///
    /// ```text
    ///       4                 5
    ///      / \               / \
    ///     2   7     ->      2   7
    ///        / \               / \
    ///       5   8             6   8
    ///        \
    ///         6
    /// ```
    fn replace_with_successor(&mut self, target: NodeId, left: NodeId, right: NodeId) {
        let successor = self.leftmost(right);

        if successor != right {
            let successor_right = self.node(successor).right;
            self.transplant(successor, successor_right);
            self.attach(successor, Side::Right, Some(right));
        }

        self.transplant(target, Some(successor));
        self.attach(successor, Side::Left, Some(left));
    }

    /// Puts `new` (or nothing) where `old` is. `old`'s parent, or the root if `old` was the
    /// root, points at `new` afterwards and `new` points back at that parent. `new`'s children
    /// are left alone and `old` keeps its stale links.
    fn transplant(&mut self, old: NodeId, new: Option<NodeId>) {
        trace_log!(old = ?old, new = ?new, "transplant");
        let old_node = self.node(old);
        let parent = old_node.parent;

        if old_node.is_root() {
            self.set_root(new);
        } else if let Some(parent) = parent {
            let side = self.side_of(parent, old);
            self.arena.get_mut(parent).set_child(side, new);
        }

        if let Some(new) = new {
            self.arena.get_mut(new).parent = parent;
        }
    }

    /// Makes `child` the `side` child of `parent`, pointing its parent link back up.
    fn attach(&mut self, parent: NodeId, side: Side, child: Option<NodeId>) {
        self.arena.get_mut(parent).set_child(side, child);
        if let Some(child) = child {
            self.arena.get_mut(child).parent = Some(parent);
        }
    }

    fn side_of(&self, parent: NodeId, child: NodeId) -> Side {
        let parent_node = self.node(parent);
        if parent_node.left == Some(child) {
            Side::Left
        } else {
            debug_assert_eq!(parent_node.right, Some(child));
            Side::Right
        }
    }
}
