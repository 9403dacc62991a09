//! Error types for the Iterator pattern.

use thiserror::Error;

/// Errors raised by an [`ArrayIterator`](super::ArrayIterator).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IteratorError {
    /// `next_item` was called when `has_next` was false.
    #[error("No such element: position {position} of {len}")]
    Exhausted { position: usize, len: usize },
}
