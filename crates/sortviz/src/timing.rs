use std::hint::black_box;
use std::time::Instant;

use crate::generator::{Scenario, test_arrays};
use crate::trace::StepSink;
use crate::{SortAlgorithm, all_algorithms, sort_plain_owned, sort_traced};

pub const SWEEP_SIZES: [usize; 5] = [100, 500, 1000, 5000, 10000];

/// Wall-clock seconds for one plain sort. The input copy happens before the
/// first timestamp, so setup cost never lands in the measurement.
pub fn time_sort(algo: SortAlgorithm, input: &[i64]) -> f64 {
    let data = input.to_vec();
    let start = Instant::now();
    let sorted = sort_plain_owned(algo, data);
    let elapsed = start.elapsed();
    black_box(&sorted);
    elapsed.as_secs_f64()
}

/// Wall-clock seconds for one traced sort, sink time included. The gap to
/// [`time_sort`] on the same input is the tracing overhead.
pub fn time_sort_traced<S: StepSink>(algo: SortAlgorithm, input: &[i64], sink: &mut S) -> f64 {
    let start = Instant::now();
    let sorted = sort_traced(algo, input, sink);
    let elapsed = start.elapsed();
    black_box(&sorted);
    elapsed.as_secs_f64()
}

#[derive(Clone, Copy, Debug)]
pub struct SweepRecord {
    pub algorithm: SortAlgorithm,
    pub scenario: Scenario,
    pub size: usize,
    pub seconds: f64,
}

/// Times every algorithm against the random / ascending / descending trio at
/// each size. The three arrays per size hold one multiset, so rows differ
/// only by ordering case.
pub fn benchmark_sweep(sizes: &[usize], seed: u64) -> Vec<SweepRecord> {
    let mut records = Vec::with_capacity(sizes.len() * all_algorithms().len() * 3);

    for &size in sizes {
        let arrays = test_arrays(size, mix_seed(seed ^ size as u64));
        let runs = [
            (Scenario::Random, &arrays.random),
            (Scenario::Ascending, &arrays.ascending),
            (Scenario::Descending, &arrays.descending),
        ];

        for &algo in all_algorithms() {
            for (scenario, data) in runs {
                records.push(SweepRecord {
                    algorithm: algo,
                    scenario,
                    size,
                    seconds: time_sort(algo, data),
                });
            }
        }
    }

    records
}

#[inline]
fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
