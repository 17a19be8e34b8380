//! Predicate checks and eager reductions.
//!
//! These operations terminate a chain: each consumes the sequence's current
//! elements and produces a scalar (or a `Result` for the aggregations that
//! need at least one element).

use std::iter::Sum;
use std::ops::Add;

use super::Sequence;
use crate::error::SequenceError;

impl<T> Sequence<T> {
    /// Returns `true` if every element satisfies the predicate.
    ///
    /// Vacuously `true` for an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable([2, 4, 6]);
    /// assert!(sequence.all(|number| number % 2 == 0));
    /// assert!(!sequence.all(|number| *number > 2));
    ///
    /// let empty: Sequence<i32> = Sequence::new();
    /// assert!(empty.all(|_| false));
    /// ```
    #[must_use]
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.iter().all(predicate)
    }

    /// Returns `true` if at least one element satisfies the predicate.
    ///
    /// Always `false` for an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable([1, 3, 4]);
    /// assert!(sequence.any(|number| number % 2 == 0));
    ///
    /// let empty: Sequence<i32> = Sequence::new();
    /// assert!(!empty.any(|_| true));
    /// ```
    #[must_use]
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.iter().any(predicate)
    }

    /// Returns `true` if some element equals `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable(["ant", "bee"]);
    /// assert!(sequence.contains(&"bee"));
    /// assert!(!sequence.contains(&"wasp"));
    /// ```
    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.elements.contains(value)
    }
}

impl<T: Clone> Sequence<T> {
    /// Returns the sum of all elements.
    ///
    /// Returns the additive identity for an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable([1, 2, 5, 9]);
    /// assert_eq!(sequence.sum::<i32>(), 17);
    /// ```
    #[must_use]
    pub fn sum<S>(&self) -> S
    where
        S: Sum<T>,
    {
        self.elements.iter().cloned().sum()
    }

    /// Returns `start` plus the running sum of all elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable([1, 2, 5, 9]);
    /// assert_eq!(sequence.sum_from(10), 27);
    /// ```
    #[must_use]
    pub fn sum_from(&self, start: T) -> T
    where
        T: Add<Output = T>,
    {
        self.elements
            .iter()
            .cloned()
            .fold(start, |accumulator, element| accumulator + element)
    }

    /// Returns the largest element.
    ///
    /// When several elements compare equal to the maximum, the first one in
    /// traversal order is returned. Use
    /// [`unwrap_or`](Result::unwrap_or) on the result to supply a default for
    /// the empty case.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Empty`] if the sequence has no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable([3, 9, 4]);
    /// assert_eq!(sequence.max(), Ok(9));
    ///
    /// let empty: Sequence<i32> = Sequence::new();
    /// assert!(empty.max().is_err());
    /// assert_eq!(empty.max().unwrap_or(7), 7);
    /// ```
    pub fn max(&self) -> Result<T, SequenceError>
    where
        T: Ord,
    {
        let mut iterator = self.elements.iter();
        let mut best = iterator
            .next()
            .ok_or(SequenceError::Empty { operation: "max" })?;
        for element in iterator {
            if element > best {
                best = element;
            }
        }
        Ok(best.clone())
    }

    /// Returns the element whose key is largest.
    ///
    /// Ties break to the first occurrence in traversal order.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Empty`] if the sequence has no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable(["bee", "wasp", "ant"]);
    /// assert_eq!(sequence.max_by_key(|word| word.len()), Ok("wasp"));
    /// ```
    pub fn max_by_key<K, F>(&self, mut key: F) -> Result<T, SequenceError>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let mut iterator = self.elements.iter();
        let mut best = iterator
            .next()
            .ok_or(SequenceError::Empty { operation: "max" })?;
        let mut best_key = key(best);
        for element in iterator {
            let candidate_key = key(element);
            if candidate_key > best_key {
                best = element;
                best_key = candidate_key;
            }
        }
        Ok(best.clone())
    }

    /// Returns the smallest element.
    ///
    /// When several elements compare equal to the minimum, the first one in
    /// traversal order is returned.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Empty`] if the sequence has no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable([3, 9, 4]);
    /// assert_eq!(sequence.min(), Ok(3));
    /// ```
    pub fn min(&self) -> Result<T, SequenceError>
    where
        T: Ord,
    {
        let mut iterator = self.elements.iter();
        let mut best = iterator
            .next()
            .ok_or(SequenceError::Empty { operation: "min" })?;
        for element in iterator {
            if element < best {
                best = element;
            }
        }
        Ok(best.clone())
    }

    /// Returns the element whose key is smallest.
    ///
    /// Ties break to the first occurrence in traversal order.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Empty`] if the sequence has no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable(["bee", "wasp", "ant"]);
    /// assert_eq!(sequence.min_by_key(|word| word.len()), Ok("bee"));
    /// ```
    pub fn min_by_key<K, F>(&self, mut key: F) -> Result<T, SequenceError>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let mut iterator = self.elements.iter();
        let mut best = iterator
            .next()
            .ok_or(SequenceError::Empty { operation: "min" })?;
        let mut best_key = key(best);
        for element in iterator {
            let candidate_key = key(element);
            if candidate_key < best_key {
                best = element;
                best_key = candidate_key;
            }
        }
        Ok(best.clone())
    }

    /// Combines the elements left-to-right, seeding the accumulator with the
    /// first element.
    ///
    /// For a seeded combination that also covers the empty case, see
    /// [`fold`](Self::fold).
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Empty`] if the sequence has no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable([1, 2, 5, 9]);
    /// assert_eq!(sequence.reduce(|left, right| left + right), Ok(17));
    ///
    /// let empty: Sequence<i32> = Sequence::new();
    /// assert!(empty.reduce(|left, right| left + right).is_err());
    /// ```
    pub fn reduce<F>(&self, function: F) -> Result<T, SequenceError>
    where
        F: FnMut(T, T) -> T,
    {
        let mut iterator = self.elements.iter().cloned();
        let seed = iterator
            .next()
            .ok_or(SequenceError::Empty { operation: "reduce" })?;
        Ok(iterator.fold(seed, function))
    }

    /// Combines the elements left-to-right onto an explicit initial
    /// accumulator.
    ///
    /// Total for any input: an empty sequence returns `initial` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable([1, 2, 5, 9]);
    /// assert_eq!(sequence.fold(10, |accumulator, element| accumulator + element), 27);
    /// ```
    #[must_use]
    pub fn fold<B, F>(&self, initial: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.elements.iter().cloned().fold(initial, function)
    }
}
