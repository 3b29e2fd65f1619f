//! This crate exposes an ordered key-value map backed by a plain (unbalanced) Binary Search
//! Tree (BST), with a focus on correct deletion and on the classic tree walks.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! This tree also keeps a link from every `Node` back up to its parent. Those links are what
//! make deletion interesting: removing a `Node` means rewiring its parent, its children and
//! possibly the root so that every link still agrees with its counterpart.
//!
//! Nodes live in an arena and refer to each other by index, so the parent links never form
//! ownership cycles.
//!
//! # Examples
//!
//! ```
//! use bst_map::Tree;
//!
//! let mut tree: Tree<i32, &str> = [(4, "four"), (2, "two"), (5, "five"), (1, "one"), (3, "three")]
//!     .into_iter()
//!     .collect();
//!
//! let mut keys = Vec::new();
//! tree.traverse_levelorder(|k, _| keys.push(*k));
//! assert_eq!(keys, [4, 2, 5, 1, 3]);
//!
//! // Removing a node with two children promotes its inorder successor.
//! assert_eq!(tree.remove(&2), Some("two"));
//!
//! let mut keys = Vec::new();
//! tree.traverse_inorder(|k, _| keys.push(*k));
//! assert_eq!(keys, [1, 3, 4, 5]);
//! assert_eq!(tree.len(), 4);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

#[macro_use]
mod tracing_helpers;

mod delete;
mod error;
mod node;
mod traverse;
mod tree;
mod util;
mod validate;


pub use error::{InvariantViolation, TreeError};
pub use traverse::Order;
pub use tree::Tree;
