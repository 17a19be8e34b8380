//! Error types for sequence operations.
//!
//! Every failure in this library is synchronous and local: an operation either
//! fully succeeds or returns a [`SequenceError`] without having mutated
//! anything. There is no partial-failure state to recover from.

use thiserror::Error;

/// The error type returned by fallible [`Sequence`](crate::Sequence)
/// operations.
///
/// # Examples
///
/// ```rust
/// use fluentable::{Sequence, SequenceError};
///
/// let empty: Sequence<i32> = Sequence::new();
/// assert_eq!(
///     empty.max(),
///     Err(SequenceError::Empty { operation: "max" })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// An aggregation that needs at least one element was called on an empty
    /// sequence without a seed value (`max`, `min`, `reduce`).
    #[error("cannot compute `{operation}` of an empty sequence")]
    Empty {
        /// The name of the operation that failed.
        operation: &'static str,
    },

    /// An index-based access fell outside the sequence bounds.
    #[error("index {index} out of bounds for sequence of length {length}")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The length of the sequence at the time of the call.
        length: usize,
    },

    /// `single` or `single_where` found more than one candidate element.
    #[error("expected at most one element, found {matches}")]
    MultipleElements {
        /// How many elements matched.
        matches: usize,
    },
}
