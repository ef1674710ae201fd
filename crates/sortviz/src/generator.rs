use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub const RANDOM_MIN: i64 = 1;
pub const RANDOM_MAX: i64 = 1000;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Scenario {
    Ascending,
    Descending,
    Random,
}

impl Scenario {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::Random => "random",
        }
    }
}

pub const ALL_SCENARIOS: [Scenario; 3] = [
    Scenario::Ascending,
    Scenario::Descending,
    Scenario::Random,
];

pub fn all_scenarios() -> &'static [Scenario] {
    &ALL_SCENARIOS
}

/// Ascending yields `1..=size`, descending `size..=1`, random `size` uniform
/// draws from `[RANDOM_MIN, RANDOM_MAX]`. Size 0 yields an empty sequence
/// for every scenario.
pub fn generate(scenario: Scenario, size: usize) -> Vec<i64> {
    generate_with_rng(scenario, size, &mut rand::rng())
}

pub fn generate_seeded(scenario: Scenario, size: usize, seed: u64) -> Vec<i64> {
    generate_with_rng(scenario, size, &mut StdRng::seed_from_u64(seed))
}

fn generate_with_rng<R: Rng + ?Sized>(scenario: Scenario, size: usize, rng: &mut R) -> Vec<i64> {
    match scenario {
        Scenario::Ascending => (1..=size as i64).collect(),
        Scenario::Descending => (1..=size as i64).rev().collect(),
        Scenario::Random => (0..size)
            .map(|_| rng.random_range(RANDOM_MIN..=RANDOM_MAX))
            .collect(),
    }
}

/// One random draw plus its ascending-sorted and descending-sorted copies,
/// all three holding the same multiset of values.
#[derive(Clone, Debug)]
pub struct TestArrays {
    pub random: Vec<i64>,
    pub ascending: Vec<i64>,
    pub descending: Vec<i64>,
}

pub fn test_arrays(size: usize, seed: u64) -> TestArrays {
    let random = generate_seeded(Scenario::Random, size, seed);

    let mut ascending = random.clone();
    ascending.sort_unstable();

    let mut descending = ascending.clone();
    descending.reverse();

    TestArrays {
        random,
        ascending,
        descending,
    }
}
