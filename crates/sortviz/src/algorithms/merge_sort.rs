use crate::trace::StepSink;

pub fn sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    if input.len() <= 1 {
        return input.to_vec();
    }

    let mid = input.len() / 2;
    let left = sort(&input[..mid]);
    let right = sort(&input[mid..]);

    merge(&left, &right)
}

pub fn sort_traced<S: StepSink>(input: &[i64], sink: &mut S) -> Vec<i64> {
    if input.len() <= 1 {
        return input.to_vec();
    }

    let mid = input.len() / 2;
    let left = sort_traced(&input[..mid], sink);
    let right = sort_traced(&input[mid..], sink);

    // Snapshot per merge, post-order: both halves have already emitted theirs.
    let merged = merge(&left, &right);
    sink.record(&merged);
    merged
}

// Ties take the left element, which keeps the merge stable.
pub fn merge<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut i = 0;
    let mut j = 0;

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }

    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}
