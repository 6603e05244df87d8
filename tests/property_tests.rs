//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify that the
//! heap invariants hold for both polarities and for custom comparators.

use std::cmp::Ordering;

use proptest::prelude::*;
use rust_comparator_heaps::comparator::{reverse, Compare, Natural, Order, Oriented, Reversed};
use rust_comparator_heaps::{BinaryHeap, MaxBinaryHeap, MinBinaryHeap};

/// Checks the heap property over the raw storage
fn assert_heap_property<T, C: Compare<T>>(heap: &BinaryHeap<T, C>) -> Result<(), TestCaseError> {
    let items = heap.as_slice();
    for child in 1..items.len() {
        let parent = (child - 1) / 2;
        prop_assert_ne!(
            heap.comparator().compare(&items[parent], &items[child]),
            Ordering::Greater,
            "parent {} outranked by child {}",
            parent,
            child
        );
    }
    Ok(())
}

fn drain_in_order<T, C: Compare<T>>(mut heap: BinaryHeap<T, C>) -> Vec<T> {
    let mut out = Vec::with_capacity(heap.len());
    while let Some(item) = heap.pop() {
        out.push(item);
    }
    out
}

/// Applies push (`false`) and pop (`true`) operations, checking the
/// heap property, size and root against a sorted model after every step
fn check_ops_against_model<C: Compare<i32>>(
    mut heap: BinaryHeap<i32, C>,
    ops: Vec<(bool, i32)>,
) -> Result<(), TestCaseError> {
    let mut model: Vec<i32> = Vec::new();

    for (should_pop, value) in ops {
        if should_pop {
            let popped = heap.pop();
            if model.is_empty() {
                prop_assert_eq!(popped, None);
            } else {
                // Model is kept sorted in pop order, so the front is the root
                let expected = model.remove(0);
                prop_assert_eq!(popped, Some(expected));
            }
        } else {
            let size = heap.push(value);
            let pos = model
                .iter()
                .position(|m| heap.comparator().compare(&value, m) == Ordering::Less)
                .unwrap_or(model.len());
            model.insert(pos, value);
            prop_assert_eq!(size, model.len());
        }

        assert_heap_property(&heap)?;
        prop_assert_eq!(heap.len(), model.len());
        prop_assert_eq!(heap.is_empty(), model.is_empty());
        prop_assert_eq!(heap.peek(), model.first());
    }

    Ok(())
}

/// Consecutive pops never step backwards under the heap's comparator
fn check_sorted_extraction<C: Compare<i32>>(mut heap: BinaryHeap<i32, C>) -> Result<(), TestCaseError> {
    let expected_len = heap.len();
    let mut previous: Option<i32> = None;
    let mut count = 0;
    while let Some(item) = heap.pop() {
        if let Some(prev) = previous {
            prop_assert_ne!(heap.comparator().compare(&prev, &item), Ordering::Greater);
        }
        previous = Some(item);
        count += 1;
    }
    prop_assert_eq!(count, expected_len);
    Ok(())
}

fn ops_strategy(max_len: usize) -> impl Strategy<Value = Vec<(bool, i32)>> {
    prop::collection::vec((prop::bool::ANY, -100i32..100), 0..max_len)
}

proptest! {
    #[test]
    fn test_min_ops_match_model(ops in ops_strategy(200)) {
        check_ops_against_model(MinBinaryHeap::new(), ops)?;
    }

    #[test]
    fn test_max_ops_match_model(ops in ops_strategy(200)) {
        check_ops_against_model(MaxBinaryHeap::new(), ops)?;
    }

    #[test]
    fn test_closure_ops_match_model(ops in ops_strategy(200)) {
        // Orders by absolute value only, so many elements tie
        let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
        let mut heap: BinaryHeap<i32, _> = BinaryHeap::with_comparator(by_abs);
        let mut live = 0usize;
        for (should_pop, value) in ops {
            if should_pop {
                let root_abs = heap.peek().map(|v: &i32| v.abs());
                let min_abs = heap.iter().map(|v| v.abs()).min();
                prop_assert_eq!(root_abs, min_abs);
                if heap.pop().is_some() {
                    live -= 1;
                }
            } else {
                live += 1;
                prop_assert_eq!(heap.push(value), live);
            }
            assert_heap_property(&heap)?;
        }
    }

    #[test]
    fn test_small_sizes_sort(values in prop::collection::vec(any::<i32>(), 0..4)) {
        let mut expected = values.clone();
        expected.sort();
        let heap: MinBinaryHeap<i32> = values.into_iter().collect();
        assert_heap_property(&heap)?;
        prop_assert_eq!(drain_in_order(heap), expected);
    }

    #[test]
    fn test_min_sorted_extraction(values in prop::collection::vec(any::<i32>(), 0..300)) {
        let mut expected = values.clone();
        expected.sort();
        let heap: MinBinaryHeap<i32> = values.into_iter().collect();
        prop_assert_eq!(drain_in_order(heap), expected);
    }

    #[test]
    fn test_max_sorted_extraction(values in prop::collection::vec(any::<i32>(), 0..300)) {
        let mut expected = values.clone();
        expected.sort_by(|a, b| b.cmp(a));
        let heap: MaxBinaryHeap<i32> = values.into_iter().collect();
        prop_assert_eq!(drain_in_order(heap), expected);
    }

    #[test]
    fn test_oriented_sorted_extraction(
        values in prop::collection::vec(-1000i32..1000, 0..200),
        max in prop::bool::ANY,
    ) {
        let order = if max { Order::Max } else { Order::Min };
        let heap = BinaryHeap::from_iter_with_comparator(values, Oriented::new(Natural, order));
        check_sorted_extraction(heap)?;
    }

    #[test]
    fn test_variant_symmetry(values in prop::collection::btree_set(any::<i32>(), 0..200)) {
        let by_value = |a: &i32, b: &i32| a.cmp(b);
        let values: Vec<i32> = values.into_iter().collect();

        let max = BinaryHeap::max_from_iter_with_comparator(values.clone(), by_value);
        let min_reversed = BinaryHeap::from_iter_with_comparator(values.clone(), reverse(by_value));
        let min = BinaryHeap::from_iter_with_comparator(values, by_value);

        let max_order = drain_in_order(max);
        let mut min_order = drain_in_order(min);
        prop_assert_eq!(&max_order, &drain_in_order(min_reversed));
        min_order.reverse();
        prop_assert_eq!(max_order, min_order);
    }

    #[test]
    fn test_heapify_matches_repeated_push(values in prop::collection::vec(-50i32..50, 0..300)) {
        let heapified = MinBinaryHeap::from_vec(values.clone());
        assert_heap_property(&heapified)?;
        let inserted: MinBinaryHeap<i32> = values.into_iter().collect();
        prop_assert_eq!(heapified.len(), inserted.len());
        prop_assert_eq!(heapified.into_sorted_vec(), drain_in_order(inserted));
    }

    #[test]
    fn test_append_preserves_multiset(
        left in prop::collection::vec(-100i32..100, 0..150),
        right in prop::collection::vec(-100i32..100, 0..150),
    ) {
        let mut expected: Vec<i32> = left.iter().chain(right.iter()).copied().collect();
        expected.sort_by(|a, b| b.cmp(a));

        let mut heap = MaxBinaryHeap::from_vec(left);
        let mut other = MaxBinaryHeap::from_vec(right);
        heap.append(&mut other);

        prop_assert!(other.is_empty());
        assert_heap_property(&heap)?;
        prop_assert_eq!(heap.into_sorted_vec(), expected);
    }

    #[test]
    fn test_clear_resets_to_fresh(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut heap: BinaryHeap<i32, Reversed<Natural>> = values.into_iter().collect();
        heap.clear();
        prop_assert_eq!(heap.len(), 0);
        prop_assert_eq!(heap.peek(), None);
        prop_assert_eq!(heap.pop(), None);
        heap.clear();
        prop_assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_peek_is_extremum(values in prop::collection::vec(any::<i32>(), 1..200)) {
        let min: MinBinaryHeap<i32> = values.iter().copied().collect();
        let max: MaxBinaryHeap<i32> = values.iter().copied().collect();
        prop_assert_eq!(min.peek(), values.iter().min());
        prop_assert_eq!(max.peek(), values.iter().max());
    }
}
