//! Element accessors.
//!
//! Lookups that may simply find nothing (`first`, `last` and their predicate
//! variants) return [`Option`]; the caller supplies a default with
//! [`Option::unwrap_or`]. Accessors with a real precondition (`get` in
//! bounds, `single` unambiguous) return a [`Result`] instead.

use super::Sequence;
use crate::error::SequenceError;

impl<T> Sequence<T> {
    /// Returns the first element, or `None` if the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable([1, 2, 3]);
    /// assert_eq!(sequence.first(), Some(&1));
    ///
    /// let empty: Sequence<i32> = Sequence::new();
    /// assert_eq!(empty.first(), None);
    /// assert_eq!(empty.first().copied().unwrap_or(0), 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the first element satisfying `predicate`, scanning in
    /// traversal order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable([1, 2, 3, 4]);
    /// assert_eq!(sequence.first_where(|number| number % 2 == 0), Some(&2));
    /// assert_eq!(sequence.first_where(|number| *number > 9), None);
    /// ```
    #[must_use]
    pub fn first_where<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.iter().find(|element| predicate(element))
    }

    /// Returns the last element, or `None` if the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable([1, 2, 3]);
    /// assert_eq!(sequence.last(), Some(&3));
    /// ```
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Returns the last element satisfying `predicate`, scanning from the
    /// end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable([1, 2, 3, 4]);
    /// assert_eq!(sequence.last_where(|number| number % 2 == 0), Some(&4));
    /// ```
    #[must_use]
    pub fn last_where<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.elements
            .iter()
            .rev()
            .find(|element| predicate(element))
    }

    /// Returns the element at `index` in traversal order.
    ///
    /// A negative index is unrepresentable by the `usize` parameter.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfBounds`] if `index` is not below
    /// the length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::{Sequence, SequenceError};
    ///
    /// let sequence = Sequence::from_iterable([1, 2, 3]);
    /// assert_eq!(sequence.get(1), Ok(&2));
    /// assert_eq!(
    ///     sequence.get(3),
    ///     Err(SequenceError::IndexOutOfBounds { index: 3, length: 3 })
    /// );
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, SequenceError> {
        self.elements
            .get(index)
            .ok_or(SequenceError::IndexOutOfBounds {
                index,
                length: self.elements.len(),
            })
    }

    /// Returns the only element of the sequence.
    ///
    /// `Ok(None)` for an empty sequence (apply a default at the call site).
    /// Holding more than one element is ambiguous and fails regardless of the
    /// element values; to narrow the candidates first, use
    /// [`single_where`](Self::single_where).
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::MultipleElements`] if the sequence holds more
    /// than one element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::{Sequence, SequenceError};
    ///
    /// assert_eq!(Sequence::singleton(5).single(), Ok(Some(&5)));
    /// assert_eq!(Sequence::<i32>::new().single(), Ok(None));
    /// assert_eq!(
    ///     Sequence::from_iterable([1, 2, 3]).single(),
    ///     Err(SequenceError::MultipleElements { matches: 3 })
    /// );
    /// ```
    pub fn single(&self) -> Result<Option<&T>, SequenceError> {
        match self.elements.as_slice() {
            [] => Ok(None),
            [element] => Ok(Some(element)),
            _ => Err(SequenceError::MultipleElements {
                matches: self.elements.len(),
            }),
        }
    }

    /// Returns the only element satisfying `predicate`.
    ///
    /// `Ok(None)` when nothing matches (apply a default at the call site).
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::MultipleElements`] if more than one element
    /// matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::{Sequence, SequenceError};
    ///
    /// let sequence = Sequence::from_iterable([1, 2, 3]);
    /// assert_eq!(sequence.single_where(|number| *number == 2), Ok(Some(&2)));
    /// assert_eq!(sequence.single_where(|number| *number > 9), Ok(None));
    /// assert_eq!(
    ///     sequence.single_where(|number| *number > 1),
    ///     Err(SequenceError::MultipleElements { matches: 2 })
    /// );
    /// ```
    pub fn single_where<P>(&self, mut predicate: P) -> Result<Option<&T>, SequenceError>
    where
        P: FnMut(&T) -> bool,
    {
        let mut matches = self.elements.iter().filter(|element| predicate(element));
        let candidate = matches.next();
        let excess = matches.count();
        if excess > 0 {
            return Err(SequenceError::MultipleElements {
                matches: excess + 1,
            });
        }
        Ok(candidate)
    }
}
