//! This crate exposes an unbalanced Binary Search Tree (BST) over any
//! ordered, displayable element type.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored elements. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one element
//! and sometimes has child `Node`s. The most important invariants of a BST
//! are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! Those invariants make searching for a value take `O(height)` (where
//! `height` is the longest path from the root `Node` to a leaf `Node`), and
//! they make visiting the left subtree, then the subtree root, then the
//! right subtree produce the elements in sorted order.
//!
//! The tree here never rebalances itself, so the height is whatever the
//! insertion order produces: `O(lg N)` for well-mixed input, `N` for sorted
//! input. On top of membership [`search`], duplicate-rejecting [`insert`],
//! and successor-based [`remove`], it renders the inorder, preorder,
//! postorder, and level-order walks into any [`std::fmt::Write`] sink and
//! can [`graph`] its own shape sideways for inspection.
//!
//! [`search`]: Tree::search
//! [`insert`]: Tree::insert
//! [`remove`]: Tree::remove
//! [`graph`]: Tree::graph

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod tree;

pub use error::{Error, Result};
pub use tree::{Tree, DEFAULT_SEPARATOR};
