//! A mutable BST over any ordered key type. Operations descend the tree
//! recursively and re-link child slots on the way back up, so the same
//! code path handles an empty tree, an inner node, and the root.
//!
//! Duplicate keys are allowed and always routed into the right subtree,
//! so the ordering invariant reads: left subtree keys are strictly less
//! than a node's key, right subtree keys are greater than or equal.
//!
//! # Examples
//!
//! ```
//! use ordtree::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(1);
//! assert!(tree.contains(&1));
//!
//! // Deleting a key reports whether anything was removed.
//! assert!(tree.delete(&1));
//! assert!(!tree.delete(&1));
//! ```

use std::cmp::Ordering;

use crate::error::Error;

type Link<K> = Option<Box<Node<K>>>;

struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new_leaf(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }
}

/// A Binary Search Tree storing keys in sorted order. This can be used
/// for inserting, finding, and deleting keys. Duplicates are kept; ties
/// go right.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    // An unbalanced tree can be as deep as it is long, so the recursive
    // drop of nested `Box`es could blow the stack. Detach children onto
    // an explicit stack instead and free one node per iteration.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        pending.extend(self.root.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns how many keys are in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts the given key into the tree. Inserting a key that is
    /// already present stores a second copy in the right subtree of the
    /// existing one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(5);
    /// tree.insert(5);
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        self.root = Some(insert_at(self.root.take(), key));
        self.len += 1;
    }

    /// Returns whether the given key exists anywhere in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        search_in(&self.root, key)
    }

    /// Returns the smallest key in the tree, or [`Error::EmptyTree`]
    /// when there are no nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::tree::Tree;
    /// use ordtree::Error;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.min(), Err(Error::EmptyTree));
    ///
    /// tree.insert(5);
    /// tree.insert(3);
    /// assert_eq!(tree.min(), Ok(&3));
    /// ```
    pub fn min(&self) -> Result<&K, Error> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyTree)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.key)
    }

    /// Returns the largest key in the tree, or [`Error::EmptyTree`]
    /// when there are no nodes.
    pub fn max(&self) -> Result<&K, Error> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyTree)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.key)
    }

    /// Returns the height of the tree: the number of edges on the longest
    /// path from the root down to a leaf. The empty tree has height `-1`
    /// and a single node has height `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.insert(5);
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.insert(3);
    /// tree.insert(8);
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn height(&self) -> isize {
        height_of(&self.root)
    }

    /// Deletes one node holding the given key and returns whether
    /// anything was removed. Deleting a key that isn't present (or
    /// deleting from an empty tree) is a no-op.
    ///
    /// A node with two children is replaced by its in-order successor:
    /// the smallest key of its right subtree, which by the ordering
    /// invariant is greater than everything in the left subtree and no
    /// greater than anything remaining on the right.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.delete(&1));
    /// assert!(!tree.contains(&1));
    /// assert!(!tree.delete(&1));
    /// ```
    pub fn delete(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let (root, removed) = delete_at(self.root.take(), key);
        self.root = root;
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Returns the keys of the tree in sorted order. By the ordering
    /// invariant this sequence is non-decreasing after any mix of
    /// inserts and deletes.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [5, 3, 8] {
    ///     tree.insert(key);
    /// }
    ///
    /// assert_eq!(tree.in_order(), [&3, &5, &8]);
    /// ```
    pub fn in_order(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len);
        walk_in_order(&self.root, &mut keys);
        keys
    }
}

/// Descends to the slot where `key` belongs, creates a leaf there, and
/// hands each visited node back to its parent so the links re-attach on
/// the unwind. Called on `None` this builds the root itself.
fn insert_at<K: Ord>(link: Link<K>, key: K) -> Box<Node<K>> {
    match link {
        None => Node::new_leaf(key),
        Some(mut node) => {
            if key < node.key {
                node.left = Some(insert_at(node.left.take(), key));
            } else {
                node.right = Some(insert_at(node.right.take(), key));
            }
            node
        }
    }
}

fn search_in<K: Ord>(link: &Link<K>, key: &K) -> bool {
    match link {
        None => false,
        Some(node) => match key.cmp(&node.key) {
            Ordering::Less => search_in(&node.left, key),
            Ordering::Equal => true,
            Ordering::Greater => search_in(&node.right, key),
        },
    }
}

fn height_of<K>(link: &Link<K>) -> isize {
    match link {
        None => -1,
        Some(node) => 1 + height_of(&node.left).max(height_of(&node.right)),
    }
}

fn walk_in_order<'a, K>(link: &'a Link<K>, keys: &mut Vec<&'a K>) {
    if let Some(node) = link {
        walk_in_order(&node.left, keys);
        keys.push(&node.key);
        walk_in_order(&node.right, keys);
    }
}

/// Deletes one node holding `key` from the subtree rooted at `link` and
/// returns the repaired subtree along with whether a node was removed.
/// The caller reassigns the returned link into the slot it came from,
/// which makes deleting the root the same as deleting any other node.
fn delete_at<K: Ord>(link: Link<K>, key: &K) -> (Link<K>, bool) {
    match link {
        None => (None, false),
        Some(mut node) => match key.cmp(&node.key) {
            Ordering::Less => {
                let (left, removed) = delete_at(node.left.take(), key);
                node.left = left;
                (Some(node), removed)
            }
            Ordering::Greater => {
                let (right, removed) = delete_at(node.right.take(), key);
                node.right = right;
                (Some(node), removed)
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                // Covers both the leaf case and the only-right-child case.
                (None, right) => (right, true),
                (left, None) => (left, true),
                (left, Some(right)) => {
                    let (successor, right) = detach_min(right);
                    node.key = successor;
                    node.left = left;
                    node.right = right;
                    (Some(node), true)
                }
            },
        },
    }
}

/// Unlinks the leftmost node of the subtree and returns its key together
/// with the remaining subtree. The leftmost node has no left child, so
/// its right child (possibly `None`) slides into its place.
fn detach_min<K>(mut node: Box<Node<K>>) -> (K, Link<K>) {
    match node.left.take() {
        None => {
            let Node { key, right, .. } = *node;
            (key, right)
        }
        Some(left) => {
            let (min, rest) = detach_min(left);
            node.left = rest;
            (min, Some(node))
        }
    }
}
