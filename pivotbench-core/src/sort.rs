//! Pivot Quicksort Engine
//!
//! Two partition-based quicksort variants that differ only in how the pivot
//! is chosen:
//! - **Randomized**: the pivot is the value of a uniformly drawn element
//! - **Deterministic**: the pivot is the last element of the current run
//!
//! Both variants leave the input untouched and build a new sequence from
//! three freshly allocated buckets per step (`less`, `equal`, `greater`).
//! The deterministic variant is quadratic on sorted input; that is the
//! behavior being measured, so no median-of-three or introsort fallback is
//! applied here.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Pivot selection policy for one sort invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PivotStrategy {
    /// Value of a uniformly random element of the current run
    Randomized,
    /// Last element of the current run
    Deterministic,
}

impl PivotStrategy {
    /// Both strategies, in report order
    pub const ALL: [PivotStrategy; 2] = [PivotStrategy::Randomized, PivotStrategy::Deterministic];

    /// Display label used in tables and chart legends
    pub fn label(self) -> &'static str {
        match self {
            PivotStrategy::Randomized => "Randomized QuickSort",
            PivotStrategy::Deterministic => "Deterministic QuickSort",
        }
    }

    /// Pick the pivot value for `run`.
    ///
    /// `run` must be non-empty. A random index draw gives every element the
    /// same weight, so a value occurring `k` times is picked with
    /// probability `k / len`.
    fn select<'a, T, R: Rng>(self, run: &'a [T], rng: &mut R) -> &'a T {
        match self {
            PivotStrategy::Randomized => &run[rng.gen_range(0..run.len())],
            PivotStrategy::Deterministic => &run[run.len() - 1],
        }
    }
}

impl std::fmt::Display for PivotStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for PivotStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "randomized" | "random" => Ok(PivotStrategy::Randomized),
            "deterministic" | "last" => Ok(PivotStrategy::Deterministic),
            other => Err(format!("Unknown pivot strategy: {}", other)),
        }
    }
}

/// Result of splitting a run around a pivot value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T> {
    /// Elements strictly less than the pivot, in input order
    pub less: Vec<T>,
    /// Elements equal to the pivot (the pivot included), in input order
    pub equal: Vec<T>,
    /// Elements strictly greater than the pivot, in input order
    pub greater: Vec<T>,
}

/// Split `run` into less/equal/greater buckets in a single pass.
pub fn partition<T: Ord>(run: Vec<T>, pivot: &T) -> Partition<T> {
    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();

    for value in run {
        match value.cmp(pivot) {
            std::cmp::Ordering::Less => less.push(value),
            std::cmp::Ordering::Equal => equal.push(value),
            std::cmp::Ordering::Greater => greater.push(value),
        }
    }

    Partition {
        less,
        equal,
        greater,
    }
}

enum Step<T> {
    Sort(Vec<T>),
    Emit(Vec<T>),
}

/// Sort `sequence` with the given strategy, drawing random pivots from `rng`.
///
/// The recursion `sort(less) + equal + sort(greater)` is driven by an
/// explicit work stack so that the deterministic strategy's linear depth on
/// sorted input does not exhaust the thread stack.
pub fn sort_with_rng<T, R>(sequence: &[T], strategy: PivotStrategy, rng: &mut R) -> Vec<T>
where
    T: Ord + Clone,
    R: Rng,
{
    sort_owned_with_rng(sequence.to_vec(), strategy, rng)
}

/// Sort a sequence the caller already owns (typically a per-trial copy).
///
/// Same algorithm as [`sort_with_rng`], minus the up-front copy.
pub fn sort_owned_with_rng<T, R>(sequence: Vec<T>, strategy: PivotStrategy, rng: &mut R) -> Vec<T>
where
    T: Ord + Clone,
    R: Rng,
{
    let mut output = Vec::with_capacity(sequence.len());
    let mut stack = vec![Step::Sort(sequence)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Emit(run) => output.extend(run),
            Step::Sort(run) if run.len() <= 1 => output.extend(run),
            Step::Sort(run) => {
                let pivot = strategy.select(&run, rng).clone();
                let Partition {
                    less,
                    equal,
                    greater,
                } = partition(run, &pivot);

                // Popped in reverse: less, then equal, then greater
                stack.push(Step::Sort(greater));
                stack.push(Step::Emit(equal));
                stack.push(Step::Sort(less));
            }
        }
    }

    output
}

/// Sort `sequence` with the given strategy using the thread-local RNG.
pub fn sort<T: Ord + Clone>(sequence: &[T], strategy: PivotStrategy) -> Vec<T> {
    sort_with_rng(sequence, strategy, &mut rand::thread_rng())
}

/// Sort an owned sequence with the given strategy using the thread-local RNG.
pub fn sort_owned<T: Ord + Clone>(sequence: Vec<T>, strategy: PivotStrategy) -> Vec<T> {
    sort_owned_with_rng(sequence, strategy, &mut rand::thread_rng())
}

/// Quicksort with a uniformly random pivot value.
pub fn randomized_quick_sort<T: Ord + Clone>(sequence: &[T]) -> Vec<T> {
    sort(sequence, PivotStrategy::Randomized)
}

/// Quicksort pivoting on the last element.
pub fn deterministic_quick_sort<T: Ord + Clone>(sequence: &[T]) -> Vec<T> {
    sort(sequence, PivotStrategy::Deterministic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn is_sorted<T: Ord>(data: &[T]) -> bool {
        data.windows(2).all(|w| w[0] <= w[1])
    }

    fn sorted_copy(data: &[u64]) -> Vec<u64> {
        let mut v = data.to_vec();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_scenario_with_duplicates() {
        let input = vec![5, 3, 8, 3, 1];
        for strategy in PivotStrategy::ALL {
            assert_eq!(sort(&input, strategy), vec![1, 3, 3, 5, 8]);
        }
        // Input is untouched
        assert_eq!(input, vec![5, 3, 8, 3, 1]);
    }

    #[test]
    fn test_base_cases() {
        let empty: Vec<u64> = Vec::new();
        for strategy in PivotStrategy::ALL {
            assert!(sort(&empty, strategy).is_empty());
            assert_eq!(sort(&[42u64], strategy), vec![42]);
        }
    }

    #[test]
    fn test_matches_std_sort() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in [2, 3, 10, 257, 1000] {
            let data: Vec<u64> = (0..len).map(|_| rng.gen_range(0..=50)).collect();
            for strategy in PivotStrategy::ALL {
                let out = sort_with_rng(&data, strategy, &mut rng);
                assert_eq!(out, sorted_copy(&data), "{strategy} failed at len {len}");
            }
        }
    }

    #[test]
    fn test_sorted_input_is_unchanged() {
        let data: Vec<u64> = (0..2_000).collect();
        for strategy in PivotStrategy::ALL {
            assert_eq!(sort(&data, strategy), data);
        }
    }

    #[test]
    fn test_deep_deterministic_run_does_not_overflow() {
        // Linear partition depth with a last-element pivot
        let data: Vec<u32> = (0..5_000).collect();
        let out = deterministic_quick_sort(&data);
        assert_eq!(out.len(), data.len());
        assert!(is_sorted(&out));
    }

    #[test]
    fn test_deterministic_is_repeatable() {
        let mut rng = StdRng::seed_from_u64(99);
        let data: Vec<u64> = (0..500).map(|_| rng.gen_range(0..1_000)).collect();
        let first = deterministic_quick_sort(&data);
        for _ in 0..5 {
            assert_eq!(deterministic_quick_sort(&data), first);
        }
    }

    #[test]
    fn test_randomized_always_sorts() {
        let data = vec![9u64, 1, 9, 4, 4, 4, 0, 7, 2, 9, 1];
        let expected = sorted_copy(&data);
        for _ in 0..50 {
            assert_eq!(randomized_quick_sort(&data), expected);
        }
    }

    #[test]
    fn test_owned_matches_borrowed() {
        let data = vec![10u64, 2, 33, 2, 7];
        for strategy in PivotStrategy::ALL {
            assert_eq!(sort_owned(data.clone(), strategy), sort(&data, strategy));
        }
    }

    #[test]
    fn test_all_equal_values() {
        let data = vec![3u8; 64];
        for strategy in PivotStrategy::ALL {
            assert_eq!(sort(&data, strategy), data);
        }
    }

    #[test]
    fn test_partition_preserves_bucket_order() {
        let run = vec![(5, 'a'), (1, 'b'), (5, 'c'), (9, 'd'), (0, 'e')];
        let p = partition(run, &(5, 'b'));
        assert_eq!(p.less, vec![(5, 'a'), (1, 'b'), (0, 'e')]);
        assert!(p.equal.is_empty());
        assert_eq!(p.greater, vec![(5, 'c'), (9, 'd')]);

        let p = partition(vec![2, 7, 2, 1, 2], &2);
        assert_eq!(p.less, vec![1]);
        assert_eq!(p.equal, vec![2, 2, 2]);
        assert_eq!(p.greater, vec![7]);
    }

    #[test]
    fn test_deterministic_pivot_is_last_element() {
        let mut rng = StdRng::seed_from_u64(0);
        let run = [4, 8, 1, 6];
        assert_eq!(*PivotStrategy::Deterministic.select(&run, &mut rng), 6);
    }

    #[test]
    fn test_randomized_pivot_weights_duplicates() {
        // Value 1 appears three times out of four
        let mut rng = StdRng::seed_from_u64(1234);
        let run = [1, 1, 1, 2];
        let hits = (0..4_000)
            .filter(|_| *PivotStrategy::Randomized.select(&run, &mut rng) == 1)
            .count();
        assert!((2_700..3_300).contains(&hits), "got {hits} hits");
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!("random".parse::<PivotStrategy>(), Ok(PivotStrategy::Randomized));
        assert_eq!("LAST".parse::<PivotStrategy>(), Ok(PivotStrategy::Deterministic));
        assert!("median".parse::<PivotStrategy>().is_err());
    }
}
