use std::cmp::Ordering;

use crate::trace::StepSink;

pub fn sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    if input.len() <= 1 {
        return input.to_vec();
    }

    let (less, equal, greater) = partition_around_middle(input);

    let mut sorted = sort(&less);
    sorted.extend_from_slice(&equal);
    sorted.extend(sort(&greater));
    sorted
}

pub fn sort_traced<S: StepSink>(input: &[i64], sink: &mut S) -> Vec<i64> {
    if input.len() <= 1 {
        return input.to_vec();
    }

    let (less, equal, greater) = partition_around_middle(input);

    // Snapshot is the frame-local partition result, emitted before either
    // recursion runs (pre-order over partition events).
    let mut snapshot = Vec::with_capacity(input.len());
    snapshot.extend_from_slice(&less);
    snapshot.extend_from_slice(&equal);
    snapshot.extend_from_slice(&greater);
    sink.record(&snapshot);

    let mut sorted = sort_traced(&less, sink);
    sorted.extend_from_slice(&equal);
    sorted.extend(sort_traced(&greater, sink));
    sorted
}

// Pivot is the element at len / 2 of the current subsequence. Deterministic,
// never randomized.
fn partition_around_middle<T: Ord + Clone>(input: &[T]) -> (Vec<T>, Vec<T>, Vec<T>) {
    let pivot = &input[input.len() / 2];

    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();
    for value in input {
        match value.cmp(pivot) {
            Ordering::Less => less.push(value.clone()),
            Ordering::Equal => equal.push(value.clone()),
            Ordering::Greater => greater.push(value.clone()),
        }
    }

    (less, equal, greater)
}
