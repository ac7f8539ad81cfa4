//! Error type for the mutating tree operations.

use thiserror::Error;

/// Errors raised by [`Tree::insert`] and [`Tree::remove`].
///
/// Both are ordinary expected outcomes, raised before the tree is touched:
/// a failed insert allocates nothing and a failed remove detaches nothing.
///
/// [`Tree::insert`]: crate::Tree::insert
/// [`Tree::remove`]: crate::Tree::remove
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The inserted item is already stored in the tree; duplicates are
    /// rejected, not merged.
    #[error("item already in the tree")]
    DuplicateKey,

    /// The item to remove is not stored in the tree.
    #[error("item not in the tree")]
    KeyNotFound,
}

/// Result type alias for tree operations.
pub type Result<T> = std::result::Result<T, Error>;
