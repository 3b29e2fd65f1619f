//! A full structural check of a [`Tree`], used to catch broken links in tests.

use crate::error::InvariantViolation;
use crate::node::NodeId;
use crate::tree::Tree;

/// A node waiting to be checked along with the closest ancestors bounding its key from below
/// and above.
struct Pending {
    id: NodeId,
    lower: Option<NodeId>,
    upper: Option<NodeId>,
}

impl<K, V> Tree<K, V> {
    /// Walks the whole tree and checks that:
    ///
    /// 1. every key is greater than the keys in its left subtree and less than the keys in its
    ///    right subtree,
    /// 2. every child's parent link points at the node holding it and the root has no parent,
    /// 3. no node can be reached twice,
    /// 4. [`Tree::len`] matches the number of reachable nodes.
    ///
    /// This takes `O(len)` time. A healthy tree always returns `Ok`.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::Tree;
    ///
    /// let mut tree: Tree<_, _> = (0..8).map(|x| (x, x)).collect();
    /// tree.remove(&3);
    ///
    /// assert_eq!(tree.validate(), Ok(()));
    /// ```
    pub fn validate(&self) -> Result<(), InvariantViolation>
    where
        K: Ord,
    {
        let Some(root) = self.root() else {
            return self.check_len(0);
        };
        if let Some(parent) = self.node(root).parent {
            return Err(InvariantViolation::RootHasParent {
                root: root.index(),
                parent: parent.index(),
            });
        }

        let mut seen = vec![false; self.arena.capacity()];
        let mut reachable = 0;
        let mut stack = vec![Pending {
            id: root,
            lower: None,
            upper: None,
        }];

        while let Some(Pending { id, lower, upper }) = stack.pop() {
            if std::mem::replace(&mut seen[id.index()], true) {
                return Err(InvariantViolation::Revisited { node: id.index() });
            }
            reachable += 1;

            let node = self.node(id);
            for (ancestor, in_order) in [
                (lower, lower.map(|l| self.node(l).key < node.key)),
                (upper, upper.map(|u| node.key < self.node(u).key)),
            ] {
                if let (Some(ancestor), Some(false)) = (ancestor, in_order) {
                    return Err(InvariantViolation::OutOfOrder {
                        node: id.index(),
                        ancestor: ancestor.index(),
                    });
                }
            }

            for (child, lower, upper) in [(node.left, lower, Some(id)), (node.right, Some(id), upper)]
            {
                let Some(child) = child else {
                    continue;
                };
                let recorded = self.node(child).parent;
                if recorded != Some(id) {
                    return Err(InvariantViolation::ParentMismatch {
                        child: child.index(),
                        holder: id.index(),
                        recorded: recorded.map(NodeId::index),
                    });
                }
                stack.push(Pending {
                    id: child,
                    lower,
                    upper,
                });
            }
        }

        self.check_len(reachable)
    }

    fn check_len(&self, reachable: usize) -> Result<(), InvariantViolation> {
        if self.len() == reachable {
            Ok(())
        } else {
            Err(InvariantViolation::LengthMismatch {
                recorded: self.len(),
                reachable,
            })
        }
    }
}
