use crate::SortAlgorithm;
use crate::classify::Case;
use crate::display_name;

const N_LOG_N: &str = "O(n log n)";
const N_SQUARED: &str = "O(n²)";
const LINEAR: &str = "O(n)";

#[derive(Clone, Debug, PartialEq)]
pub struct ComplexityReport {
    pub algorithm: &'static str,
    pub size: usize,
    pub complexity: &'static str,
    pub case: Case,
    pub rationale: &'static str,
    pub estimated_ops: u64,
}

/// Static textbook lookup: the case selects the best / average / worst
/// column (ascending, unordered, descending respectively). `estimated_ops`
/// is a closed-form magnitude for display, not a measured count.
pub fn advise_complexity(algo: SortAlgorithm, case: Case, size: usize) -> ComplexityReport {
    let n = size as u64;

    let (complexity, rationale, estimated_ops) = match (algo, case) {
        (SortAlgorithm::QuickSort, Case::Ascending) => (
            N_LOG_N,
            "When pivot divides array into equal parts",
            n.saturating_mul(bit_length(n)),
        ),
        (SortAlgorithm::QuickSort, Case::Unordered) => (
            N_LOG_N,
            "When pivot divides array into roughly equal parts",
            n.saturating_mul(bit_length(n)),
        ),
        (SortAlgorithm::QuickSort, Case::Descending) => (
            N_SQUARED,
            "When array is already sorted or reverse sorted",
            n.saturating_mul(n),
        ),
        (SortAlgorithm::MergeSort, _) => (
            N_LOG_N,
            "Always divides array into equal parts",
            n.saturating_mul(bit_length(n)),
        ),
        (SortAlgorithm::InsertionSort, Case::Ascending) => (
            LINEAR,
            "When array is already sorted",
            n,
        ),
        (SortAlgorithm::InsertionSort, Case::Unordered) => (
            N_SQUARED,
            "When elements are randomly distributed",
            n.saturating_mul(n) / 2,
        ),
        (SortAlgorithm::InsertionSort, Case::Descending) => (
            N_SQUARED,
            "When array is reverse sorted",
            n.saturating_mul(n),
        ),
    };

    ComplexityReport {
        algorithm: display_name(algo),
        size,
        complexity,
        case,
        rationale,
        estimated_ops,
    }
}

// Bit-length convention: 0 for 0, floor(log2(n)) + 1 otherwise.
fn bit_length(n: u64) -> u64 {
    (u64::BITS - n.leading_zeros()) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_length_convention() {
        assert_eq!(bit_length(0), 0);
        assert_eq!(bit_length(1), 1);
        assert_eq!(bit_length(2), 2);
        assert_eq!(bit_length(1000), 10);
        assert_eq!(bit_length(1024), 11);
    }

    #[test]
    fn merge_sort_is_always_n_log_n() {
        for case in [Case::Ascending, Case::Descending, Case::Unordered] {
            let report = advise_complexity(SortAlgorithm::MergeSort, case, 1000);
            assert_eq!(report.complexity, "O(n log n)");
            assert_eq!(report.estimated_ops, 10_000);
        }
    }

    #[test]
    fn insertion_sort_best_case_is_linear() {
        let report = advise_complexity(SortAlgorithm::InsertionSort, Case::Ascending, 500);
        assert_eq!(report.algorithm, "Insertion Sort");
        assert_eq!(report.complexity, "O(n)");
        assert_eq!(report.estimated_ops, 500);
    }

    #[test]
    fn insertion_sort_quadratic_cases() {
        let average = advise_complexity(SortAlgorithm::InsertionSort, Case::Unordered, 100);
        assert_eq!(average.complexity, "O(n²)");
        assert_eq!(average.estimated_ops, 5_000);

        let worst = advise_complexity(SortAlgorithm::InsertionSort, Case::Descending, 100);
        assert_eq!(worst.complexity, "O(n²)");
        assert_eq!(worst.estimated_ops, 10_000);
    }

    #[test]
    fn quick_sort_cases() {
        let best = advise_complexity(SortAlgorithm::QuickSort, Case::Ascending, 1000);
        assert_eq!(best.complexity, "O(n log n)");
        assert_eq!(best.estimated_ops, 10_000);

        let worst = advise_complexity(SortAlgorithm::QuickSort, Case::Descending, 1000);
        assert_eq!(worst.complexity, "O(n²)");
        assert_eq!(worst.estimated_ops, 1_000_000);
    }

    #[test]
    fn size_zero_reports_zero_ops() {
        for case in [Case::Ascending, Case::Descending, Case::Unordered] {
            let report = advise_complexity(SortAlgorithm::QuickSort, case, 0);
            assert_eq!(report.size, 0);
            assert_eq!(report.estimated_ops, 0);
        }
    }
}
