//! The tree itself: insertion, search, removal and traversals.
//!
//! # Examples
//!
//! ```
//! use binarytree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&1));
//!
//! tree.insert(1);
//! assert!(tree.search(&1));
//!
//! // Inserting an equal value keeps both copies.
//! tree.insert(1);
//! assert_eq!(tree.len(), 2);
//!
//! // Removing takes out one copy at a time and hands back its value.
//! assert_eq!(tree.remove(&1), Some(1));
//! assert!(tree.search(&1));
//! assert_eq!(tree.remove(&1), Some(1));
//! assert!(!tree.search(&1));
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::mem;

use tracing::trace;

/// An owning pointer to a subtree. `None` is an absent child slot.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// An unbalanced Binary Search Tree. Values smaller than a node go to its left, everything else
/// (including equal values) goes to its right.
#[derive(Clone, PartialEq, Eq)]
pub struct Tree<T> {
    pub(crate) root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Inserts the value into the tree. The tree is never rebalanced so the shape of the tree
    /// depends entirely on insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use binarytree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    ///
    /// assert!(tree.search(&1));
    /// assert!(tree.search(&2));
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        match self.root.as_deref_mut() {
            Some(root) => root.insert(value),
            None => self.root = Some(Node::new_boxed(value)),
        }
    }

    /// Whether a value equal to `value` is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use binarytree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.search(&1));
    /// assert!(!tree.search(&42));
    /// ```
    pub fn search(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.root.as_deref().map_or(false, |root| root.search(value))
    }

    /// Same as [`Tree::search`].
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.search(value)
    }

    /// Removes one node holding `value` and returns the removed value. If the tree does not
    /// contain the value, nothing happens.
    ///
    /// When the node has two children it stays where it is and takes over the value of its
    /// in-order successor (the smallest value in its right subtree), and the successor's node is
    /// removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use binarytree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert_eq!(tree.remove(&1), None);
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        Node::remove(&mut self.root, value)
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// How many nodes are in the tree. This walks the whole tree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0.
    pub fn height(&self) -> usize {
        Node::height(&self.root)
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        self.root.as_deref().map(|root| &root.min().value)
    }

    /// The largest value in the tree. With duplicates this is the last one inserted.
    pub fn max(&self) -> Option<&T> {
        self.root.as_deref().map(|root| &root.max().value)
    }

    /// Visits the left subtree, then the node, then the right subtree. For a tree that upholds
    /// the ordering invariant this visits values in non-decreasing order.
    pub fn in_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        if let Some(root) = self.root.as_deref() {
            root.in_order(&mut visit);
        }
    }

    /// Visits the node, then the left subtree, then the right subtree.
    pub fn pre_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        if let Some(root) = self.root.as_deref() {
            root.pre_order(&mut visit);
        }
    }

    /// Visits the left subtree, then the right subtree, then the node.
    pub fn post_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        if let Some(root) = self.root.as_deref() {
            root.post_order(&mut visit);
        }
    }

    /// Visits the tree breadth first: the root, then its children from left to right, then their
    /// children and so on.
    pub fn level_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        let mut queue: VecDeque<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            visit(&node.value);
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
    }

    /// An iterator over the values in in-order sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use binarytree::Tree;
    ///
    /// let tree: Tree<_> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref())
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`Tree`]. Created by [`Tree::iter`].
pub struct Iter<'a, T> {
    /// Nodes whose value hasn't been yielded yet, but whose left subtree has been (or is about to
    /// be) fully pushed.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}

/// A `Node` holds one value and owns up to two children.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let slot = if value < self.value {
            &mut self.left
        } else {
            &mut self.right
        };
        match slot.as_deref_mut() {
            Some(child) => child.insert(value),
            None => *slot = Some(Self::new_boxed(value)),
        }
    }

    fn search(&self, value: &T) -> bool
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Less => self.left.as_deref().map_or(false, |n| n.search(value)),
            Ordering::Equal => true,
            Ordering::Greater => self.right.as_deref().map_or(false, |n| n.search(value)),
        }
    }

    /// Removes the topmost node equal to `value` from the subtree in `link`. See
    /// [`Tree::remove`].
    fn remove(link: &mut Link<T>, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let node = link.as_deref_mut()?;
        match value.cmp(&node.value) {
            Ordering::Less => Self::remove(&mut node.left, value),
            Ordering::Greater => Self::remove(&mut node.right, value),
            Ordering::Equal if node.left.is_some() && node.right.is_some() => {
                trace!("removing node with two children, promoting its successor");
                Self::take_min(&mut node.right)
                    .map(|successor| mem::replace(&mut node.value, successor))
            }
            Ordering::Equal => {
                let Node {
                    value: removed,
                    left,
                    right,
                } = *link.take()?;
                trace!(leaf = left.is_none() && right.is_none(), "splicing out node");
                *link = left.or(right);
                Some(removed)
            }
        }
    }

    /// Detaches the smallest node of the subtree in `link`, moving its right child (it can't have
    /// a left one) into its place, and returns its value.
    fn take_min(link: &mut Link<T>) -> Option<T> {
        let node = link.as_deref_mut()?;
        if node.left.is_some() {
            return Self::take_min(&mut node.left);
        }
        let Node { value, right, .. } = *link.take()?;
        *link = right;
        Some(value)
    }

    fn min(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        node
    }

    fn max(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        node
    }

    fn height(link: &Link<T>) -> usize {
        link.as_deref().map_or(0, |n| {
            1 + Self::height(&n.left).max(Self::height(&n.right))
        })
    }

    fn in_order<F>(&self, visit: &mut F)
    where
        F: FnMut(&T),
    {
        if let Some(left) = self.left.as_deref() {
            left.in_order(visit);
        }
        visit(&self.value);
        if let Some(right) = self.right.as_deref() {
            right.in_order(visit);
        }
    }

    fn pre_order<F>(&self, visit: &mut F)
    where
        F: FnMut(&T),
    {
        visit(&self.value);
        if let Some(left) = self.left.as_deref() {
            left.pre_order(visit);
        }
        if let Some(right) = self.right.as_deref() {
            right.pre_order(visit);
        }
    }

    fn post_order<F>(&self, visit: &mut F)
    where
        F: FnMut(&T),
    {
        if let Some(left) = self.left.as_deref() {
            left.post_order(visit);
        }
        if let Some(right) = self.right.as_deref() {
            right.post_order(visit);
        }
        visit(&self.value);
    }
}
