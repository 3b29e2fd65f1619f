//! Node storage. Every node of a [`Tree`][crate::Tree] lives in an [`Arena`] and links to its
//! children and parent by [`NodeId`]. The tree owns the arena, so a node's children are owned
//! through it while its parent link is just an index used to walk upwards.

use crate::util::Side;

/// Index of a slot in an [`Arena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    /// The node holding this one as a child. `None` only for the root.
    pub(crate) parent: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V, parent: Option<NodeId>) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            parent,
        }
    }

    pub(crate) fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub(crate) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }
}

/// A growable table of nodes. Released slots go on a free list and get reused by later
/// allocations.
#[derive(Clone, Debug)]
pub(crate) struct Arena<K, V> {
    slots: Vec<Option<Node<K, V>>>,
    free: Vec<NodeId>,
}

impl<K, V> Arena<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// How many slots exist, live or free. Every live `NodeId` indexes below this.
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn alloc(&mut self, key: K, value: V, parent: Option<NodeId>) -> NodeId {
        let node = Node::new(key, value, parent);
        match self.free.pop() {
            Some(id) => {
                debug_assert!(self.slots[id.0].is_none());
                self.slots[id.0] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Moves the node out of the arena, freeing its slot. The caller must already have unlinked
    /// it from the rest of the tree.
    pub(crate) fn release(&mut self, id: NodeId) -> Node<K, V> {
        let node = self.slots[id.0]
            .take()
            .unwrap_or_else(|| panic!("released an empty slot {id:?}"));
        self.free.push(id);
        node
    }

    pub(crate) fn get(&self, id: NodeId) -> &Node<K, V> {
        self.slots[id.0]
            .as_ref()
            .unwrap_or_else(|| panic!("dangling node handle {id:?}"))
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        self.slots[id.0]
            .as_mut()
            .unwrap_or_else(|| panic!("dangling node handle {id:?}"))
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}
