//! Property-based tests for Sequence laws.
//!
//! These tests verify the mathematical properties the operation set promises:
//! round-trip stability, distinct idempotence, skip/take length arithmetic,
//! and the set-algebra identities.

use std::collections::HashSet;

use fluentable::Sequence;
use proptest::prelude::*;

// =============================================================================
// Round-Trip Law
// Description: Rewrapping to_vec() yields an equal sequence
// =============================================================================

proptest! {
    #[test]
    fn prop_round_trip_law(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let sequence = Sequence::from_iterable(elements.clone());
        let rewrapped = Sequence::from_iterable(sequence.to_vec());

        prop_assert_eq!(rewrapped, sequence);
        prop_assert_eq!(Sequence::from_iterable(elements.clone()).to_vec(), elements);
    }
}

// =============================================================================
// Distinct Idempotence Law
// Description: distinct().distinct() == distinct()
// =============================================================================

proptest! {
    #[test]
    fn prop_distinct_idempotence_law(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let sequence = Sequence::from_iterable(elements);
        let once = sequence.distinct();
        let twice = once.distinct();

        prop_assert_eq!(twice, once);
    }
}

proptest! {
    #[test]
    fn prop_distinct_preserves_the_element_set(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let sequence = Sequence::from_iterable(elements);
        let unique = sequence.distinct();

        prop_assert_eq!(unique.to_hash_set(), sequence.to_hash_set());
        prop_assert_eq!(unique.len(), sequence.to_hash_set().len());
    }
}

// =============================================================================
// Length Invariants
// Description: skip(k).len() == len - k (clamped); take(k).len() == min(len, k)
// =============================================================================

proptest! {
    #[test]
    fn prop_skip_length_law(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        count in 0_usize..100
    ) {
        let sequence = Sequence::from_iterable(elements);
        let skipped = sequence.skip(count);

        prop_assert_eq!(skipped.len(), sequence.len().saturating_sub(count));
    }
}

proptest! {
    #[test]
    fn prop_take_length_law(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        count in 0_usize..100
    ) {
        let sequence = Sequence::from_iterable(elements);
        let taken = sequence.take(count);

        prop_assert_eq!(taken.len(), sequence.len().min(count));
    }
}

proptest! {
    #[test]
    fn prop_take_concat_skip_rebuilds_the_sequence(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        count in 0_usize..60
    ) {
        let sequence = Sequence::from_iterable(elements);
        let rebuilt = sequence.take(count).concat(sequence.skip(count));

        prop_assert_eq!(rebuilt, sequence);
    }
}

// =============================================================================
// Set-Algebra Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_union_commutativity_law(
        elements_a in prop::collection::vec(any::<i32>(), 0..30),
        elements_b in prop::collection::vec(any::<i32>(), 0..30)
    ) {
        let sequence_a = Sequence::from_iterable(elements_a);
        let sequence_b = Sequence::from_iterable(elements_b);

        let a_union_b = sequence_a.union(sequence_b.clone());
        let b_union_a = sequence_b.union(sequence_a.clone());

        prop_assert_eq!(a_union_b.to_hash_set(), b_union_a.to_hash_set());
    }
}

proptest! {
    #[test]
    fn prop_intersection_containment_law(
        elements_a in prop::collection::vec(any::<i32>(), 0..30),
        elements_b in prop::collection::vec(any::<i32>(), 0..30)
    ) {
        let sequence_a = Sequence::from_iterable(elements_a);
        let sequence_b = Sequence::from_iterable(elements_b);

        let common = sequence_a.intersection(sequence_b.clone()).to_hash_set();

        prop_assert!(common.is_subset(&sequence_a.to_hash_set()));
        prop_assert!(common.is_subset(&sequence_b.to_hash_set()));
    }
}

proptest! {
    #[test]
    fn prop_difference_intersection_partition_law(
        elements_a in prop::collection::vec(any::<i32>(), 0..30),
        elements_b in prop::collection::vec(any::<i32>(), 0..30)
    ) {
        let sequence_a = Sequence::from_iterable(elements_a);
        let sequence_b = Sequence::from_iterable(elements_b);

        let only_a = sequence_a.difference(sequence_b.clone()).to_hash_set();
        let common = sequence_a.intersection(sequence_b).to_hash_set();

        // difference and intersection partition A
        prop_assert!(only_a.is_disjoint(&common));
        let recombined: HashSet<i32> = only_a.union(&common).copied().collect();
        prop_assert_eq!(recombined, sequence_a.to_hash_set());
    }
}

proptest! {
    #[test]
    fn prop_symmetric_difference_decomposition_law(
        elements_a in prop::collection::vec(any::<i32>(), 0..30),
        elements_b in prop::collection::vec(any::<i32>(), 0..30)
    ) {
        let sequence_a = Sequence::from_iterable(elements_a);
        let sequence_b = Sequence::from_iterable(elements_b);

        let exclusive = sequence_a.symmetric_difference(sequence_b.clone());
        let decomposed = sequence_a
            .difference(sequence_b.clone())
            .union(sequence_b.difference(sequence_a.clone()));

        prop_assert_eq!(exclusive.to_hash_set(), decomposed.to_hash_set());
    }
}

// =============================================================================
// Transformation Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_map_preserves_length(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let sequence = Sequence::from_iterable(elements);
        let mapped = sequence.map(|number| i64::from(number) * 2);

        prop_assert_eq!(mapped.len(), sequence.len());
    }
}

proptest! {
    #[test]
    fn prop_filter_then_all_holds(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let sequence = Sequence::from_iterable(elements);
        let even = sequence.filter(|number| number % 2 == 0);

        prop_assert!(even.all(|number| number % 2 == 0));
    }
}

proptest! {
    #[test]
    fn prop_reversed_is_an_involution(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let sequence = Sequence::from_iterable(elements);

        prop_assert_eq!(sequence.reversed().reversed(), sequence);
    }
}

proptest! {
    #[test]
    fn prop_zip_length_is_the_shorter_input(
        elements_a in prop::collection::vec(any::<i32>(), 0..50),
        elements_b in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let sequence_a = Sequence::from_iterable(elements_a);
        let sequence_b = Sequence::from_iterable(elements_b);

        let zipped = sequence_a.zip(sequence_b.clone());

        prop_assert_eq!(zipped.len(), sequence_a.len().min(sequence_b.len()));
    }
}

proptest! {
    #[test]
    fn prop_sorted_agrees_with_min_and_max(elements in prop::collection::vec(any::<i32>(), 1..50)) {
        let sequence = Sequence::from_iterable(elements);
        let sorted = sequence.sorted();

        prop_assert_eq!(sorted.first().copied(), sequence.min().ok());
        prop_assert_eq!(sorted.last().copied(), sequence.max().ok());
    }
}
