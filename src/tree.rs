//! The [`Tree`] container: insertion, lookup and the link bookkeeping that deletion builds on.
//!
//! # Examples
//!
//! ```
//! use bst_map::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.get(&1), None);
//!
//! assert_eq!(tree.insert(1, 2), None);
//! assert_eq!(tree.get(&1), Some(&2));
//!
//! // Inserting a new value for the same key overwrites the value.
//! assert_eq!(tree.insert(1, 3), Some(2));
//! assert_eq!(tree.get(&1), Some(&3));
//! assert_eq!(tree.len(), 1);
//!
//! // Removing a node returns its value.
//! assert_eq!(tree.remove(&1), Some(3));
//! assert_eq!(tree.get(&1), None);
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::node::{Arena, Node, NodeId};
use crate::util::Side;

/// An ordered map stored as an unbalanced Binary Search Tree whose nodes link to both their
/// children and their parent.
///
/// Nothing rebalances the tree, so inserting keys in sorted order builds a chain. Every walk
/// over the tree uses an explicit stack or queue, so chains of any length are fine.
#[derive(Clone)]
pub struct Tree<K, V> {
    pub(crate) arena: Arena<K, V>,
    root: Option<NodeId>,
    len: usize,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for Tree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        self.traverse_inorder(|k, v| {
            map.entry(k, v);
        });
        map.finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Tree<K, V>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, V> Extend<(K, V)> for Tree<K, V>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> Tree<K, V> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// The number of entries in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    /// Inserts the given value into the tree stored at the given key. Inserting a new value for
    /// an existing key overwrites its value and returns the old one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(1, 2), None);
    /// assert_eq!(tree.insert(1, 3), Some(2));
    /// assert_eq!(tree.get(&1), Some(&3));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Ord,
    {
        let Some(mut current) = self.root else {
            self.root = Some(self.arena.alloc(key, value, None));
            self.len += 1;
            return None;
        };

        loop {
            let node = self.arena.get_mut(current);
            let side = match key.cmp(&node.key) {
                Ordering::Less => Side::Left,
                Ordering::Equal => return Some(mem::replace(&mut node.value, value)),
                Ordering::Greater => Side::Right,
            };
            match node.child(side) {
                Some(child) => current = child,
                None => {
                    let new = self.arena.alloc(key, value, Some(current));
                    self.arena.get_mut(current).set_child(side, Some(new));
                    self.len += 1;
                    return None;
                }
            }
        }
    }

    /// Potentially finds the value associated with the given key in this tree. If no node has
    /// the corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.get(&1), Some(&2));
    /// assert_eq!(tree.get(&42), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        self.find_node(key).map(|id| &self.arena.get(id).value)
    }

    /// Like [`Tree::get`] but the value can be changed in place.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V>
    where
        K: Ord,
    {
        let id = self.find_node(key)?;
        Some(&mut self.arena.get_mut(id).value)
    }

    /// Whether some node has the given key.
    pub fn contains_key(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find_node(key).is_some()
    }

    /// The entry with the smallest key.
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.root.map(|root| self.entry(self.leftmost(root)))
    }

    /// The entry with the largest key.
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        let mut current = self.root?;
        while let Some(right) = self.arena.get(current).right {
            current = right;
        }
        Some(self.entry(current))
    }

    /// How many levels are in the tree. An empty tree has a height of 0 and a lone root has a
    /// height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.arena.get(id);
            stack.extend(node.left.map(|left| (left, depth + 1)));
            stack.extend(node.right.map(|right| (right, depth + 1)));
        }
        height
    }

    pub(crate) fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Points the tree at a new entry node. This is the only way the root changes after the
    /// first insert.
    pub(crate) fn set_root(&mut self, root: Option<NodeId>) {
        self.root = root;
    }

    pub(crate) fn decrement_len(&mut self) {
        self.len -= 1;
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<K, V> {
        self.arena.get(id)
    }

    /// Walks down from the root to the node with `key`.
    pub(crate) fn find_node(&self, key: &K) -> Option<NodeId>
    where
        K: Ord,
    {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.arena.get(id);
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(id),
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// The node with the smallest key in the subtree rooted at `id`.
    pub(crate) fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.arena.get(id).left {
            id = left;
        }
        id
    }

    fn entry(&self, id: NodeId) -> (&K, &V) {
        let node = self.arena.get(id);
        (&node.key, &node.value)
    }
}
