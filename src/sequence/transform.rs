//! Chain-producing transformations.
//!
//! Every operation in this module returns a new [`Sequence`] with a freshly
//! allocated backing collection; the receiver is never modified. Results are
//! fully materialized before the call returns.

use super::Sequence;

impl<T: Clone> Sequence<T> {
    /// Transforms every element with `function`, preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable([1, 2, 3]);
    /// let doubled = sequence.map(|number| number * 2);
    /// assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
    ///
    /// // The original sequence is unchanged.
    /// assert_eq!(sequence.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, function: F) -> Sequence<U>
    where
        F: FnMut(T) -> U,
    {
        self.elements.iter().cloned().map(function).collect()
    }

    /// Keeps the elements for which `predicate` returns `true`, preserving
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable(1..=6);
    /// let even = sequence.filter(|number| number % 2 == 0);
    /// assert_eq!(even.to_vec(), vec![2, 4, 6]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.elements
            .iter()
            .cloned()
            .filter(|element| predicate(element))
            .collect()
    }

    /// Transforms every element into an iterable and flattens the results one
    /// level.
    ///
    /// The output order is map order first, inner order second.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable([1, 2, 3]);
    /// let repeated = sequence.flat_map(|number| vec![number; 2]);
    /// assert_eq!(repeated.to_vec(), vec![1, 1, 2, 2, 3, 3]);
    /// ```
    #[must_use]
    pub fn flat_map<U, I, F>(&self, function: F) -> Sequence<U>
    where
        I: IntoIterator<Item = U>,
        F: FnMut(T) -> I,
    {
        self.elements.iter().cloned().flat_map(function).collect()
    }

    /// Pairs every element with its index, starting at 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable(["a", "b"]);
    /// assert_eq!(sequence.enumerate().to_vec(), vec![(0, "a"), (1, "b")]);
    /// ```
    #[inline]
    #[must_use]
    pub fn enumerate(&self) -> Sequence<(usize, T)> {
        self.enumerate_from(0)
    }

    /// Pairs every element with its index, starting at `start` and
    /// incrementing by one per element in traversal order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable(["a", "b", "c"]);
    /// assert_eq!(
    ///     sequence.enumerate_from(5).to_vec(),
    ///     vec![(5, "a"), (6, "b"), (7, "c")]
    /// );
    /// ```
    #[must_use]
    pub fn enumerate_from(&self, start: usize) -> Sequence<(usize, T)> {
        (start..).zip(self.elements.iter().cloned()).collect()
    }

    /// Returns the elements sorted ascending.
    ///
    /// The sort is stable: equal elements keep their traversal order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable([3, 1, 2]);
    /// assert_eq!(sequence.sorted().to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn sorted(&self) -> Self
    where
        T: Ord,
    {
        let mut elements = self.elements.clone();
        elements.sort();
        Self { elements }
    }

    /// Returns the elements sorted descending.
    ///
    /// Stable: equal elements keep their traversal order. Implemented with a
    /// reversed comparator rather than by reversing the ascending result, so
    /// stability is preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable([3, 1, 2]);
    /// assert_eq!(sequence.sorted_desc().to_vec(), vec![3, 2, 1]);
    /// ```
    #[must_use]
    pub fn sorted_desc(&self) -> Self
    where
        T: Ord,
    {
        let mut elements = self.elements.clone();
        elements.sort_by(|left, right| right.cmp(left));
        Self { elements }
    }

    /// Returns the elements sorted ascending by the given key.
    ///
    /// Stable: elements with equal keys keep their traversal order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable(["wasp", "bee", "hornet"]);
    /// let by_length = sequence.sorted_by_key(|word| word.len());
    /// assert_eq!(by_length.to_vec(), vec!["bee", "wasp", "hornet"]);
    /// ```
    #[must_use]
    pub fn sorted_by_key<K, F>(&self, key: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let mut elements = self.elements.clone();
        elements.sort_by_key(key);
        Self { elements }
    }

    /// Returns the elements sorted descending by the given key.
    ///
    /// Stable: elements with equal keys keep their traversal order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable(["wasp", "bee", "hornet"]);
    /// let by_length = sequence.sorted_by_key_desc(|word| word.len());
    /// assert_eq!(by_length.to_vec(), vec!["hornet", "wasp", "bee"]);
    /// ```
    #[must_use]
    pub fn sorted_by_key_desc<K, F>(&self, mut key: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let mut elements = self.elements.clone();
        elements.sort_by(|left, right| key(right).cmp(&key(left)));
        Self { elements }
    }

    /// Returns the elements in reverse traversal order.
    ///
    /// Construction snapshots every source into an ordered collection, so
    /// this is defined for any sequence; the result reverses whatever order
    /// the snapshot captured.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable([1, 2, 3]);
    /// assert_eq!(sequence.reversed().to_vec(), vec![3, 2, 1]);
    /// ```
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut elements = self.elements.clone();
        elements.reverse();
        Self { elements }
    }

    /// Pairs elements of `self` with elements of `other` position by
    /// position.
    ///
    /// The result has the length of the shorter input; excess elements of the
    /// longer input are dropped. `other` may be any iterable, including
    /// another sequence. Chain further `zip` calls for more than two inputs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let numbers = Sequence::from_iterable([1, 2, 3]);
    /// let zipped = numbers.zip(["one", "two"]);
    /// assert_eq!(zipped.to_vec(), vec![(1, "one"), (2, "two")]);
    /// ```
    #[must_use]
    pub fn zip<U, I>(&self, other: I) -> Sequence<(T, U)>
    where
        I: IntoIterator<Item = U>,
    {
        self.elements.iter().cloned().zip(other).collect()
    }

    /// Returns all elements of `self` followed by all elements of `other`.
    ///
    /// Duplicates are retained and order is preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable([1, 2]);
    /// assert_eq!(sequence.concat([2, 3]).to_vec(), vec![1, 2, 2, 3]);
    /// ```
    #[must_use]
    pub fn concat<I>(&self, other: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.elements.iter().cloned().chain(other).collect()
    }

    /// Drops the first `count` elements.
    ///
    /// Clamped: a `count` beyond the length yields an empty sequence. A
    /// negative count is unrepresentable by the `usize` parameter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable([1, 2, 3]);
    /// assert_eq!(sequence.skip(1).to_vec(), vec![2, 3]);
    /// assert_eq!(sequence.skip(5).to_vec(), Vec::<i32>::new());
    /// ```
    #[must_use]
    pub fn skip(&self, count: usize) -> Self {
        self.elements.iter().cloned().skip(count).collect()
    }

    /// Keeps only the first `count` elements.
    ///
    /// Clamped: a `count` beyond the length yields the whole sequence. A
    /// negative count is unrepresentable by the `usize` parameter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentable::Sequence;
    ///
    /// let sequence = Sequence::from_iterable([1, 2, 3]);
    /// assert_eq!(sequence.take(2).to_vec(), vec![1, 2]);
    /// assert_eq!(sequence.take(9).to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        self.elements.iter().cloned().take(count).collect()
    }
}
