use crate::trace::StepSink;

pub fn sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    let mut data = input.to_vec();
    sort_in_place(&mut data);
    data
}

pub fn sort_in_place<T: Ord + Clone>(data: &mut [T]) {
    for i in 1..data.len() {
        let key = data[i].clone();
        let mut j = i;
        // Strict comparison: equal elements never move past each other.
        while j > 0 && data[j - 1] > key {
            data[j] = data[j - 1].clone();
            j -= 1;
        }
        data[j] = key;
    }
}

pub fn sort_traced<S: StepSink>(input: &[i64], sink: &mut S) -> Vec<i64> {
    let mut data = input.to_vec();
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        while j > 0 && data[j - 1] > key {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = key;
        // One snapshot per inserted element, always the full working array.
        sink.record(&data);
    }
    data
}
