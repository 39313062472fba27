//! This crate is a teaching collection of classic algorithms and data
//! structures, each one a standalone, independently testable unit.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and remove stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value (equal values route
//!    right in this design).
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! These invariants make searching take `O(height)` (where `height` is
//! defined as the longest path from the root `Node` to a leaf `Node`) and
//! give sorted iteration for free by visiting the left subtree, then the
//! subtree root, then the right subtree. The trees here do no rebalancing,
//! so adversarial insertion order (e.g. strictly increasing input) degrades
//! the height to `O(N)`. That is a known, accepted property of the design.
//!
//! Two constructions of the same external contract are provided:
//! [`recursive::Tree`] recurses through subtrees, rebuilding links on the
//! way back up, while [`iterative::Tree`] walks down holding the owning
//! parent link and patches links directly.
//!
//! ## Binary Heap
//!
//! [`heap::Heap`] is an array-backed priority container whose ordering
//! mode (min or max) is fixed at construction.
//!
//! ## Linear containers and routines
//!
//! [`stack::Stack`], [`queue::Queue`], and [`list::DoublyLinkedList`] are
//! pointer-based sequence containers, and [`search`] and [`sort`] hold the
//! classic slice routines.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod heap;
pub mod iterative;
pub mod list;
pub mod queue;
pub mod recursive;
pub mod search;
pub mod sort;
pub mod stack;


/// What a binary search tree should do with a value that compares equal to
/// one it already holds.
///
/// The default everywhere is [`DuplicatePolicy::Allow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Route the equal value into the right subtree, storing it as a
    /// distinct node. Removing then takes out one occurrence at a time.
    Allow,
    /// Leave the tree untouched when inserting a value it already holds.
    Reject,
}

impl Default for DuplicatePolicy {
    fn default() -> Self {
        Self::Allow
    }
}
