//! Unit tests for the element accessors: first, last, get, single.

use fluentable::{Sequence, SequenceError};
use rstest::rstest;

// =============================================================================
// first / first_where
// =============================================================================

#[rstest]
fn test_first_returns_the_head() {
    let sequence = Sequence::from_iterable([1, 2, 3]);
    assert_eq!(sequence.first(), Some(&1));
}

#[rstest]
fn test_first_of_empty_is_none() {
    let empty: Sequence<i32> = Sequence::new();
    assert_eq!(empty.first(), None);
}

#[rstest]
fn test_first_default_applies_at_the_call_site() {
    let empty: Sequence<i32> = Sequence::new();
    assert_eq!(empty.first().copied().unwrap_or(9), 9);
}

#[rstest]
fn test_first_where_scans_in_traversal_order() {
    let sequence = Sequence::from_iterable([1, 2, 3, 4]);
    assert_eq!(sequence.first_where(|number| number % 2 == 0), Some(&2));
}

#[rstest]
fn test_first_where_without_match_is_none() {
    let sequence = Sequence::from_iterable([1, 2, 3]);
    assert_eq!(sequence.first_where(|number| *number > 9), None);
}

// =============================================================================
// last / last_where
// =============================================================================

#[rstest]
fn test_last_returns_the_tail() {
    let sequence = Sequence::from_iterable([1, 2, 3]);
    assert_eq!(sequence.last(), Some(&3));
}

#[rstest]
fn test_last_of_empty_is_none() {
    let empty: Sequence<i32> = Sequence::new();
    assert_eq!(empty.last(), None);
}

#[rstest]
fn test_last_where_scans_from_the_end() {
    let sequence = Sequence::from_iterable([1, 2, 3, 4, 5]);
    assert_eq!(sequence.last_where(|number| number % 2 == 0), Some(&4));
}

#[rstest]
fn test_first_where_and_last_where_are_symmetric() {
    let sequence = Sequence::from_iterable([10, 21, 32, 43]);
    let is_even = |number: &i32| number % 2 == 0;
    assert_eq!(sequence.first_where(is_even), Some(&10));
    assert_eq!(sequence.last_where(is_even), Some(&32));
}

// =============================================================================
// get
// =============================================================================

#[rstest]
fn test_get_returns_the_element_at_the_index() {
    let sequence = Sequence::from_iterable([1, 2, 3]);
    assert_eq!(sequence.get(0), Ok(&1));
    assert_eq!(sequence.get(2), Ok(&3));
}

#[rstest]
fn test_get_at_length_is_out_of_bounds() {
    let sequence = Sequence::from_iterable([1, 2, 3]);
    assert_eq!(
        sequence.get(3),
        Err(SequenceError::IndexOutOfBounds { index: 3, length: 3 })
    );
}

#[rstest]
fn test_get_on_empty_is_out_of_bounds() {
    let empty: Sequence<i32> = Sequence::new();
    assert_eq!(
        empty.get(0),
        Err(SequenceError::IndexOutOfBounds { index: 0, length: 0 })
    );
}

// =============================================================================
// single / single_where
// =============================================================================

#[rstest]
fn test_single_of_one_element() {
    let sequence = Sequence::singleton(5);
    assert_eq!(sequence.single(), Ok(Some(&5)));
}

#[rstest]
fn test_single_of_empty_is_none() {
    let empty: Sequence<i32> = Sequence::new();
    assert_eq!(empty.single(), Ok(None));
}

#[rstest]
fn test_single_fails_on_more_than_one_element() {
    // Without a predicate the whole sequence is the candidate set, so any
    // sequence of two or more elements is ambiguous, even with equal values.
    let sequence = Sequence::from_iterable([1, 2, 3]);
    assert_eq!(
        sequence.single(),
        Err(SequenceError::MultipleElements { matches: 3 })
    );

    let duplicated = Sequence::from_iterable([7, 7]);
    assert_eq!(
        duplicated.single(),
        Err(SequenceError::MultipleElements { matches: 2 })
    );
}

#[rstest]
fn test_single_where_narrows_to_one_match() {
    let sequence = Sequence::from_iterable([1, 2, 3]);
    assert_eq!(sequence.single_where(|number| *number == 2), Ok(Some(&2)));
}

#[rstest]
fn test_single_where_without_match_is_none() {
    let sequence = Sequence::from_iterable([1, 2, 3]);
    assert_eq!(sequence.single_where(|number| *number > 9), Ok(None));
}

#[rstest]
fn test_single_where_fails_on_multiple_matches() {
    let sequence = Sequence::from_iterable([1, 2, 3, 4]);
    assert_eq!(
        sequence.single_where(|number| number % 2 == 0),
        Err(SequenceError::MultipleElements { matches: 2 })
    );
}

#[rstest]
fn test_single_where_default_applies_at_the_call_site() {
    let sequence = Sequence::from_iterable([1, 3, 5]);
    let found = sequence
        .single_where(|number| number % 2 == 0)
        .map(|element| element.copied().unwrap_or(0));
    assert_eq!(found, Ok(0));
}
