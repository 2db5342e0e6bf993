//! This crate exposes an unbalanced Binary Search Tree (BST) mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, search, and remove stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the value that
//! was inserted and will sometimes have child `Node`s. The most important
//! invariants of this BST are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value. Inserting a value that is
//!    already present keeps both copies, the new one to the right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). This tree never rebalances itself, so inserting
//! values in sorted order produces a tree that is really a linked list. BSTs also naturally
//! support sorted iteration by visiting the left subtree, then the subtree root, then the right
//! subtree.
//!
//! ## Structural editing
//!
//! [`CursorMut::set_value`] and [`CursorMut::create_children`] edit the tree without looking at
//! the ordering. They exist for callers who build a tree of a specific shape themselves (for
//! example an expression tree) and they can break the invariants above. [`Tree::search`] and
//! [`Tree::remove`] only give meaningful answers while the invariants hold.
//!
//! ## Serialization
//!
//! Trees can be written to and read from a line based text format. See the [`codec`] module.
//!
//! # Examples
//!
//! ```
//! use binarytree::Tree;
//!
//! let mut tree: Tree<i32> = [5, 3, 8].into_iter().collect();
//! assert!(tree.search(&3));
//!
//! tree.remove(&3);
//! assert!(!tree.search(&3));
//!
//! let mut sorted = Vec::new();
//! tree.in_order(|value| sorted.push(*value));
//! assert_eq!(sorted, [5, 8]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod codec;
mod cursor;
mod error;
mod tree;


pub use cursor::{Cursor, CursorMut};
pub use error::{Error, Result};
pub use tree::{Iter, Tree};
