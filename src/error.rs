//! The failure type returned by the tree's `min` and `max` operations.
//!
//! Only structural emptiness is an error: asking an empty tree for its
//! smallest or largest key has no meaningful answer. Searching for a key
//! that isn't there, deleting an absent key, or indexing the list out of
//! range are all well-defined negative outcomes (`false`, `None`) and are
//! deliberately *not* represented here.

use thiserror::Error;

/// Errors returned by operations that require a non-empty structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The tree has no nodes, so there is no smallest or largest key.
    #[error("tree is empty")]
    EmptyTree,
}
