//! Set-algebra operations.
//!
//! These operations treat the sequence's elements as a mathematical set:
//! duplicates collapse and the result order is not part of the contract.
//! Callers should compare results as sets (for example through
//! [`to_hash_set`](Sequence::to_hash_set)), not element by element.
//!
//! The `other` argument of the binary operations accepts any iterable,
//! including another [`Sequence`].

use std::collections::HashSet;
use std::hash::Hash;

use super::Sequence;

impl<T: Clone + Eq + Hash> Sequence<T> {
    /// Returns the unique elements, collapsing duplicates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable([2, 10, 2, 2, 5, 9, 10]);
    /// let unique = sequence.distinct();
    /// assert_eq!(unique.len(), 4);
    /// assert_eq!(unique.to_hash_set(), sequence.to_hash_set());
    /// ```
    #[must_use]
    pub fn distinct(&self) -> Self {
        let mut seen = HashSet::with_capacity(self.elements.len());
        self.elements
            .iter()
            .filter(|element| seen.insert((*element).clone()))
            .cloned()
            .collect()
    }

    /// Returns the elements present in `self` or `other`, collapsing
    /// duplicates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable([1, 2, 3]);
    /// let union = sequence.union([3, 4]);
    /// assert_eq!(union.to_hash_set(), Sequence::from_iterable(1..=4).to_hash_set());
    /// ```
    #[must_use]
    pub fn union<I>(&self, other: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut seen = HashSet::with_capacity(self.elements.len());
        self.elements
            .iter()
            .cloned()
            .chain(other)
            .filter(|element| seen.insert(element.clone()))
            .collect()
    }

    /// Returns the elements present in both `self` and `other`, collapsing
    /// duplicates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable([1, 2, 2, 3]);
    /// let common = sequence.intersection([2, 3, 4]);
    /// assert_eq!(common.to_hash_set(), Sequence::from_iterable([2, 3]).to_hash_set());
    /// ```
    #[must_use]
    pub fn intersection<I>(&self, other: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let members: HashSet<T> = other.into_iter().collect();
        let mut seen = HashSet::with_capacity(members.len());
        self.elements
            .iter()
            .filter(|element| members.contains(*element) && seen.insert((*element).clone()))
            .cloned()
            .collect()
    }

    /// Returns the elements present in `self` but not in `other`, collapsing
    /// duplicates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable([1, 2, 2, 3]);
    /// let remaining = sequence.difference([2]);
    /// assert_eq!(remaining.to_hash_set(), Sequence::from_iterable([1, 3]).to_hash_set());
    /// ```
    #[must_use]
    pub fn difference<I>(&self, other: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let members: HashSet<T> = other.into_iter().collect();
        let mut seen = HashSet::with_capacity(self.elements.len());
        self.elements
            .iter()
            .filter(|element| !members.contains(*element) && seen.insert((*element).clone()))
            .cloned()
            .collect()
    }

    /// Returns the elements present in exactly one of `self` and `other`,
    /// collapsing duplicates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable([1, 2, 3]);
    /// let exclusive = sequence.symmetric_difference([2, 3, 4]);
    /// assert_eq!(
    ///     exclusive.to_hash_set(),
    ///     Sequence::from_iterable([1, 4]).to_hash_set()
    /// );
    /// ```
    #[must_use]
    pub fn symmetric_difference<I>(&self, other: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let own: HashSet<T> = self.elements.iter().cloned().collect();
        let others: Vec<T> = other.into_iter().collect();
        let members: HashSet<T> = others.iter().cloned().collect();

        let mut seen = HashSet::with_capacity(own.len() + members.len());
        self.elements
            .iter()
            .filter(|element| !members.contains(*element))
            .cloned()
            .chain(
                others
                    .iter()
                    .filter(|element| !own.contains(*element))
                    .cloned(),
            )
            .filter(|element| seen.insert(element.clone()))
            .collect()
    }
}
