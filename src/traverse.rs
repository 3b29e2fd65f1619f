//! Read-only walks over a [`Tree`]. Each walk hands every `(key, value)` pair to a visitor
//! closure exactly once.
//!
//! Using the tree `4 -> (2 -> (1, 3), 5)`:
//!
//! ```text
//!         4
//!        / \
//!       2   5
//!      / \
//!     1   3
//! ```
//!
//! | order      | keys            |
//! |------------|-----------------|
//! | inorder    | `1, 2, 3, 4, 5` |
//! | postorder  | `1, 3, 2, 5, 4` |
//! | level-order| `4, 2, 5, 1, 3` |
//!
//! None of the walks recurse, so a degenerate chain can't overflow the call stack.

use std::collections::VecDeque;

use crate::node::NodeId;
use crate::tree::Tree;

/// The order in which [`Tree::traverse`] visits nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, node, right subtree. Keys come out ascending.
    Inorder,
    /// Left subtree, right subtree, node.
    Postorder,
    /// Breadth first, each level left to right.
    Levelorder,
}

impl<K, V> Tree<K, V> {
    /// Visits every entry in the given [`Order`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::{Order, Tree};
    ///
    /// let tree: Tree<_, _> = [(2, 'b'), (1, 'a'), (3, 'c')].into_iter().collect();
    ///
    /// let mut values = String::new();
    /// tree.traverse(Order::Postorder, |_, v| values.push(*v));
    /// assert_eq!(values, "acb");
    /// ```
    pub fn traverse<F>(&self, order: Order, visitor: F)
    where
        F: FnMut(&K, &V),
    {
        match order {
            Order::Inorder => self.traverse_inorder(visitor),
            Order::Postorder => self.traverse_postorder(visitor),
            Order::Levelorder => self.traverse_levelorder(visitor),
        }
    }

    /// Visits the left subtree, then the node, then the right subtree. Keys are visited in
    /// ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::Tree;
    ///
    /// let tree: Tree<_, _> = [4, 2, 5, 1, 3].into_iter().map(|k| (k, ())).collect();
    ///
    /// let mut keys = Vec::new();
    /// tree.traverse_inorder(|k, _| keys.push(*k));
    /// assert_eq!(keys, [1, 2, 3, 4, 5]);
    /// ```
    pub fn traverse_inorder<F>(&self, mut visitor: F)
    where
        F: FnMut(&K, &V),
    {
        let mut stack: Vec<NodeId> = Vec::new();
        let mut current = self.root();
        loop {
            while let Some(id) = current {
                stack.push(id);
                current = self.node(id).left;
            }
            let Some(id) = stack.pop() else {
                return;
            };
            let node = self.node(id);
            visitor(&node.key, &node.value);
            current = node.right;
        }
    }

    /// Visits the left subtree, then the right subtree, then the node.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::Tree;
    ///
    /// let tree: Tree<_, _> = [4, 2, 5, 1, 3].into_iter().map(|k| (k, ())).collect();
    ///
    /// let mut keys = Vec::new();
    /// tree.traverse_postorder(|k, _| keys.push(*k));
    /// assert_eq!(keys, [1, 3, 2, 5, 4]);
    /// ```
    pub fn traverse_postorder<F>(&self, mut visitor: F)
    where
        F: FnMut(&K, &V),
    {
        // The flag says whether the node's children are already on the stack, i.e. whether
        // popping it again means it's time to visit it.
        let mut stack: Vec<(NodeId, bool)> = self.root().map(|root| (root, false)).into_iter().collect();
        while let Some((id, expanded)) = stack.pop() {
            let node = self.node(id);
            if expanded {
                visitor(&node.key, &node.value);
                continue;
            }
            stack.push((id, true));
            // Right goes on first so the left subtree comes off first.
            stack.extend(node.right.map(|right| (right, false)));
            stack.extend(node.left.map(|left| (left, false)));
        }
    }

    /// Visits the tree one level at a time, from the root down and left to right within a
    /// level.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::Tree;
    ///
    /// let tree: Tree<_, _> = [4, 2, 5, 1, 3].into_iter().map(|k| (k, ())).collect();
    ///
    /// let mut keys = Vec::new();
    /// tree.traverse_levelorder(|k, _| keys.push(*k));
    /// assert_eq!(keys, [4, 2, 5, 1, 3]);
    /// ```
    pub fn traverse_levelorder<F>(&self, mut visitor: F)
    where
        F: FnMut(&K, &V),
    {
        let Some(root) = self.root() else {
            return;
        };
        let mut queue = VecDeque::from([root]);
        while let Some(id) = queue.pop_front() {
            let node = self.node(id);
            visitor(&node.key, &node.value);
            queue.extend(node.left);
            queue.extend(node.right);
        }
    }
}
