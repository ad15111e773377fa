//! This crate exposes a Binary Search Tree (BST) and a companion
//! singly linked list, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than or equal to its own key (this tree keeps duplicates,
//!    and ties go right).
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). An in-order traversal always
//! visits the keys in sorted order. The tree here does no rebalancing, so the
//! height can degrade to `O(N)` for adversarial insertion orders - an accepted
//! limitation of the design rather than a defect.
//!
//! ## Linked List
//!
//! The [`list`] module holds a singly linked list with head, tail, and
//! positional operations. Unlike the tree it has no ordering invariant -
//! only that the chain of `next` links is acyclic, which exclusive ownership
//! of each node guarantees by construction.

#![deny(missing_docs)]

pub mod error;
pub mod list;
pub mod tree;

pub use error::Error;
