//! # fluentable
//!
//! A fluent wrapper around finite sequences providing chainable
//! transformation, aggregation, and set-algebra operations.
//!
//! ## Overview
//!
//! This library wraps any finite iterable source in a [`Sequence`] that
//! exposes the well-known sequence operations as a fluent, chainable API:
//!
//! - **Conversions**: `to_vec`, `to_boxed_slice`, `to_hash_set`, `to_btree_set`
//! - **Predicate checks**: `all`, `any`, `contains`, `is_empty`
//! - **Aggregations**: `len`, `sum`, `max`, `min`, `reduce`, `fold`
//! - **Transformations**: `map`, `filter`, `flat_map`, `enumerate`, `sorted`,
//!   `reversed`, `zip`, `concat`, `skip`, `take`
//! - **Set algebra**: `distinct`, `union`, `intersection`, `difference`,
//!   `symmetric_difference`
//! - **Element accessors**: `first`, `last`, `get`, `single`
//!
//! Every transformation is eager and returns a *new* [`Sequence`]; the source
//! is snapshotted at construction time and never mutated afterwards, so each
//! instance is independent and trivially thread-safe.
//!
//! ## Example
//!
//! ```rust
//! use fluentable::Sequence;
//!
//! let total: i32 = Sequence::from_iterable(1..=10)
//!     .filter(|number| number % 2 == 0)
//!     .map(|number| number * number)
//!     .sum();
//! assert_eq!(total, 220);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` support for [`Sequence`]

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use fluentable::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::SequenceError;
    pub use crate::sequence::Sequence;
}

pub mod error;
pub mod sequence;

pub use error::SequenceError;
pub use sequence::Sequence;

#[cfg(test)]
mod tests {
    use super::Sequence;

    #[test]
    fn library_compiles() {
        // Basic smoke test to ensure the library compiles
        let sequence = Sequence::from_iterable([1, 2, 3]);
        assert_eq!(sequence.len(), 3);
    }
}
