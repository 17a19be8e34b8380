//! The fluent sequence wrapper.
//!
//! This module provides [`Sequence`], an immutable snapshot of a finite
//! iterable source with a chainable operation set.
//!
//! # Overview
//!
//! A [`Sequence`] is constructed from any finite iterable and owns its
//! elements from that point on:
//!
//! - **Snapshot at construction**: the source is consumed (or copied) eagerly,
//!   so later mutation of the original container cannot be observed through
//!   the wrapper.
//! - **Copy-on-transform**: every chain-producing operation allocates a new
//!   backing collection and returns a new [`Sequence`]; no operation ever
//!   mutates an existing instance.
//! - **Eager evaluation**: there are no lazy views; each call fully
//!   materializes its result before returning.
//!
//! The operations are grouped into submodules by concern: aggregations,
//! chain-producing transformations, set algebra, and element accessors. All of
//! them are inherent methods on [`Sequence`], so callers only ever import the
//! one type.
//!
//! # Examples
//!
//! ```rust
//! use fluentable::Sequence;
//!
//! let words = Sequence::from_iterable(["delta", "alpha", "charlie", "bravo"]);
//!
//! let sorted = words.sorted();
//! assert_eq!(sorted.to_vec(), vec!["alpha", "bravo", "charlie", "delta"]);
//!
//! // The original wrapper is unchanged.
//! assert_eq!(words.first(), Some(&"delta"));
//! ```
//!
//! A wrapper is itself iterable, so it can feed another wrapper or any
//! operation that accepts an iterable argument:
//!
//! ```rust
//! use fluentable::Sequence;
//!
//! let inner = Sequence::from_iterable([1, 2, 3]);
//! let outer = Sequence::from_iterable(inner.clone());
//! assert_eq!(outer, inner);
//! ```

mod aggregate;
mod select;
mod set_algebra;
mod transform;

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::Hash;

/// An immutable, eagerly materialized sequence of elements with a fluent
/// operation set.
///
/// See the [module documentation](self) for the evaluation model.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Sequence<T> {
    elements: Vec<T>,
}

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence: Sequence<i32> = Sequence::new();
    /// assert!(sequence.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates a sequence containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::singleton(42);
    /// assert_eq!(sequence.to_vec(), vec![42]);
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self {
            elements: vec![element],
        }
    }

    /// Creates a sequence by snapshotting any finite iterable source.
    ///
    /// The source is consumed eagerly; the resulting sequence owns its
    /// elements and is unaffected by anything that later happens to the
    /// source. Accepts vectors, arrays, ranges, sets, other sequences, or any
    /// other [`IntoIterator`]. Non-iterable inputs are rejected at compile
    /// time by the trait bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let from_range = Sequence::from_iterable(1..=3);
    /// let from_array = Sequence::from_iterable([1, 2, 3]);
    /// assert_eq!(from_range, from_array);
    /// ```
    #[must_use]
    pub fn from_iterable<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            elements: iterable.into_iter().collect(),
        }
    }

    /// Creates a sequence by copying the elements of a slice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_slice(&[1, 2, 3]);
    /// assert_eq!(sequence.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self
    where
        T: Clone,
    {
        Self {
            elements: slice.to_vec(),
        }
    }

    /// Returns the number of elements in the sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable(1..=5);
    /// assert_eq!(sequence.len(), 5);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let empty: Sequence<i32> = Sequence::new();
    /// assert!(empty.is_empty());
    /// assert!(!Sequence::singleton(1).is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the elements as a slice, in traversal order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over references to the elements, in traversal
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable([1, 2, 3]);
    /// let doubled: Vec<i32> = sequence.iter().map(|element| element * 2).collect();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T: Clone> Sequence<T> {
    /// Returns the elements as a new `Vec`, in traversal order with
    /// duplicates retained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable([3, 1, 3]);
    /// assert_eq!(sequence.to_vec(), vec![3, 1, 3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.clone()
    }

    /// Returns the elements as a new boxed slice, in traversal order with
    /// duplicates retained.
    ///
    /// The fixed-size, immutable counterpart of [`to_vec`](Self::to_vec).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable([1, 2, 3]);
    /// let boxed: Box<[i32]> = sequence.to_boxed_slice();
    /// assert_eq!(&*boxed, &[1, 2, 3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn to_boxed_slice(&self) -> Box<[T]> {
        self.elements.clone().into_boxed_slice()
    }

    /// Returns the elements as a new `HashSet`, collapsing duplicates.
    ///
    /// Order is not meaningful in the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable([1, 2, 2, 3, 3, 3]);
    /// assert_eq!(sequence.to_hash_set().len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn to_hash_set(&self) -> HashSet<T>
    where
        T: Eq + Hash,
    {
        self.elements.iter().cloned().collect()
    }

    /// Returns the elements as a new `BTreeSet`, collapsing duplicates.
    ///
    /// The resulting set iterates in ascending element order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable([3, 1, 2, 1]);
    /// let ordered: Vec<i32> = sequence.to_btree_set().into_iter().collect();
    /// assert_eq!(ordered, vec![1, 2, 3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn to_btree_set(&self) -> BTreeSet<T>
    where
        T: Ord,
    {
        self.elements.iter().cloned().collect()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> From<Vec<T>> for Sequence<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    #[inline]
    fn from(slice: &[T]) -> Self {
        Self::from_slice(slice)
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    #[inline]
    fn from(elements: [T; N]) -> Self {
        Self::from_iterable(elements)
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        Self::from_iterable(iterable)
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Sequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SequenceVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> SequenceVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SequenceVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = Sequence<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(Sequence { elements })
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Sequence<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SequenceVisitor::new())
    }
}

// =============================================================================
// Compile-Time Assertions
// =============================================================================

static_assertions::assert_impl_all!(Sequence<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Sequence<String>: Send, Sync, Clone);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Display Tests
    // =========================================================================

    #[rstest]
    fn test_display_empty_sequence() {
        let sequence: Sequence<i32> = Sequence::new();
        assert_eq!(format!("{sequence}"), "[]");
    }

    #[rstest]
    fn test_display_single_element_sequence() {
        let sequence = Sequence::singleton(42);
        assert_eq!(format!("{sequence}"), "[42]");
    }

    #[rstest]
    fn test_display_multiple_elements() {
        let sequence = Sequence::from_iterable([1, 2, 3]);
        assert_eq!(format!("{sequence}"), "[1, 2, 3]");
    }

    #[rstest]
    fn test_debug_renders_as_list() {
        let sequence = Sequence::from_iterable(["a", "b"]);
        assert_eq!(format!("{sequence:?}"), r#"["a", "b"]"#);
    }
}
