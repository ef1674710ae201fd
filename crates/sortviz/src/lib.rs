mod algorithms;

pub mod classify;
pub mod complexity;
pub mod generator;
pub mod input;
pub mod timing;
pub mod trace;

pub use classify::{Case, classify};
pub use complexity::{ComplexityReport, advise_complexity};
pub use generator::{
    ALL_SCENARIOS, Scenario, TestArrays, all_scenarios, generate, generate_seeded, test_arrays,
};
pub use input::{InputError, parse_sequence, parse_size};
pub use timing::{SWEEP_SIZES, SweepRecord, benchmark_sweep, time_sort, time_sort_traced};
pub use trace::{StepLog, StepSink};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    QuickSort,
    MergeSort,
    InsertionSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 3] = [
    SortAlgorithm::QuickSort,
    SortAlgorithm::MergeSort,
    SortAlgorithm::InsertionSort,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::QuickSort => "quick_sort",
        SortAlgorithm::MergeSort => "merge_sort",
        SortAlgorithm::InsertionSort => "insertion_sort",
    }
}

pub fn display_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::QuickSort => "Quick Sort",
        SortAlgorithm::MergeSort => "Merge Sort",
        SortAlgorithm::InsertionSort => "Insertion Sort",
    }
}

/// Sorts a copy of `input` ascending. The caller's sequence is never mutated.
pub fn sort_plain(algo: SortAlgorithm, input: &[i64]) -> Vec<i64> {
    match algo {
        SortAlgorithm::QuickSort => algorithms::quick_sort::sort(input),
        SortAlgorithm::MergeSort => algorithms::merge_sort::sort(input),
        SortAlgorithm::InsertionSort => algorithms::insertion_sort::sort(input),
    }
}

// Owned-input path for the timing harness: insertion sorts the buffer in
// place, so no copy lands inside the timed window.
pub(crate) fn sort_plain_owned(algo: SortAlgorithm, mut data: Vec<i64>) -> Vec<i64> {
    match algo {
        SortAlgorithm::QuickSort => algorithms::quick_sort::sort(&data),
        SortAlgorithm::MergeSort => algorithms::merge_sort::sort(&data),
        SortAlgorithm::InsertionSort => {
            algorithms::insertion_sort::sort_in_place(&mut data);
            data
        }
    }
}

/// Same result as [`sort_plain`], additionally feeding `sink` one snapshot
/// after every partition (quick), merge (merge) or inserted element
/// (insertion). The sink runs synchronously on the sorting call path.
pub fn sort_traced<S: StepSink>(algo: SortAlgorithm, input: &[i64], sink: &mut S) -> Vec<i64> {
    match algo {
        SortAlgorithm::QuickSort => algorithms::quick_sort::sort_traced(input, sink),
        SortAlgorithm::MergeSort => algorithms::merge_sort::sort_traced(input, sink),
        SortAlgorithm::InsertionSort => algorithms::insertion_sort::sort_traced(input, sink),
    }
}
