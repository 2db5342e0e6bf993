//! Positional handles into a [`Tree`].
//!
//! A cursor starts at the root and can only walk down. It never owns anything: it borrows the
//! tree for as long as it lives, so the tree can't be changed behind its back. In particular a
//! node can't be removed while a cursor points at it or at one of its ancestors; the compiler
//! rejects such code.
//!
//! # Examples
//!
//! ```
//! use binarytree::Tree;
//!
//! let mut tree = Tree::new();
//! tree.insert(2);
//!
//! // Build a shape by hand instead of through `insert`.
//! let mut cursor = tree.cursor_mut();
//! assert!(cursor.create_children(1, 3));
//! assert!(cursor.move_to_right_child());
//! assert_eq!(cursor.value().unwrap(), &3);
//!
//! let mut level_order = Vec::new();
//! tree.level_order(|v| level_order.push(*v));
//! assert_eq!(level_order, [2, 1, 3]);
//! ```

use std::mem;

use tracing::trace;

use crate::error::{Error, Result};
use crate::tree::{Node, Tree};

impl<T> Tree<T> {
    /// A read-only cursor at the root. It is invalid if the tree is empty. Any number of these may
    /// exist at once.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor {
            node: self.root.as_deref(),
        }
    }

    /// A cursor at the root that can also edit the tree. It is invalid if the tree is empty.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            node: self.root.as_deref_mut(),
        }
    }
}

/// A read-only cursor. Created by [`Tree::cursor`].
pub struct Cursor<'a, T> {
    node: Option<&'a Node<T>>,
}

impl<'a, T> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Self { node: self.node }
    }
}

impl<'a, T> Copy for Cursor<'a, T> {}

impl<'a, T> Cursor<'a, T> {
    /// Moves to the left child and returns `true` if there is one. Otherwise stays put and returns
    /// `false`.
    pub fn move_to_left_child(&mut self) -> bool {
        match self.node.and_then(|n| n.left.as_deref()) {
            Some(left) => {
                self.node = Some(left);
                true
            }
            None => false,
        }
    }

    /// Moves to the right child and returns `true` if there is one. Otherwise stays put and
    /// returns `false`.
    pub fn move_to_right_child(&mut self) -> bool {
        match self.node.and_then(|n| n.right.as_deref()) {
            Some(right) => {
                self.node = Some(right);
                true
            }
            None => false,
        }
    }

    /// The value at the cursor.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if the cursor doesn't point at a node.
    pub fn value(&self) -> Result<&'a T> {
        self.node
            .map(|n| &n.value)
            .ok_or(Error::InvalidPosition)
    }

    /// Whether the cursor points at a node.
    pub fn is_valid(&self) -> bool {
        self.node.is_some()
    }

    /// Whether the node at the cursor has no children.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if the cursor doesn't point at a node.
    pub fn is_leaf(&self) -> Result<bool> {
        self.node
            .map(Node::is_leaf)
            .ok_or(Error::InvalidPosition)
    }
}

/// A cursor that can overwrite values and grow leaves. Created by [`Tree::cursor_mut`].
///
/// **Note** [`CursorMut::set_value`] and [`CursorMut::create_children`] do not look at the
/// ordering of values. They are meant for building trees of a given shape by hand; after using
/// them [`Tree::search`] and [`Tree::remove`] may miss values that are in the tree.
pub struct CursorMut<'a, T> {
    node: Option<&'a mut Node<T>>,
}

impl<'a, T> CursorMut<'a, T> {
    /// Moves to the left child and returns `true` if there is one. Otherwise stays put and returns
    /// `false`.
    pub fn move_to_left_child(&mut self) -> bool {
        match self.node.take() {
            Some(node) if node.left.is_some() => {
                self.node = node.left.as_deref_mut();
                true
            }
            unmoved => {
                self.node = unmoved;
                false
            }
        }
    }

    /// Moves to the right child and returns `true` if there is one. Otherwise stays put and
    /// returns `false`.
    pub fn move_to_right_child(&mut self) -> bool {
        match self.node.take() {
            Some(node) if node.right.is_some() => {
                self.node = node.right.as_deref_mut();
                true
            }
            unmoved => {
                self.node = unmoved;
                false
            }
        }
    }

    /// The value at the cursor.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if the cursor doesn't point at a node.
    pub fn value(&self) -> Result<&T> {
        self.node
            .as_deref()
            .map(|n| &n.value)
            .ok_or(Error::InvalidPosition)
    }

    /// Overwrites the value at the cursor in place and returns the old one. The shape of the tree
    /// doesn't change and the new value isn't checked against its neighbours.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if the cursor doesn't point at a node. The value is dropped.
    pub fn set_value(&mut self, value: T) -> Result<T> {
        self.node
            .as_deref_mut()
            .map(|n| mem::replace(&mut n.value, value))
            .ok_or(Error::InvalidPosition)
    }

    /// Whether the cursor points at a node.
    pub fn is_valid(&self) -> bool {
        self.node.is_some()
    }

    /// Whether the node at the cursor has no children.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if the cursor doesn't point at a node.
    pub fn is_leaf(&self) -> Result<bool> {
        self.node
            .as_deref()
            .map(Node::is_leaf)
            .ok_or(Error::InvalidPosition)
    }

    /// Gives the leaf at the cursor two new leaf children holding `left` and `right`. Returns
    /// `false` without touching the tree if the cursor is invalid or not at a leaf.
    ///
    /// The cursor stays where it is.
    pub fn create_children(&mut self, left: T, right: T) -> bool {
        match self.node.as_deref_mut() {
            Some(node) if node.is_leaf() => {
                node.left = Some(Node::new_boxed(left));
                node.right = Some(Node::new_boxed(right));
                trace!("grew two children under a leaf");
                true
            }
            _ => false,
        }
    }

    /// A read-only view of the current position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            node: self.node.as_deref(),
        }
    }
}
