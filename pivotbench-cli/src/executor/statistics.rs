//! Statistics Computation
//!
//! Summary statistics for every (size, strategy) measurement, computed after
//! the sweep has finished so it never overlaps with timing.
//!
//! Uses Rayon to process sizes in parallel; output keeps sweep order.

use pivotbench_core::{AggregateResult, PivotStrategy};
use pivotbench_stats::{
    ComparisonResult, NOISY_CV_THRESHOLD, SummaryStatistics, compare_trials, summarize_durations,
};
use rayon::prelude::*;

/// Statistics for one measured size
#[derive(Debug, Clone)]
pub struct SizeStatistics {
    /// Input size
    pub input_size: usize,
    /// Randomized strategy trials
    pub randomized: SummaryStatistics,
    /// Deterministic strategy trials
    pub deterministic: SummaryStatistics,
    /// Deterministic measured against the randomized baseline, when defined
    pub comparison: Option<ComparisonResult>,
}

impl SizeStatistics {
    /// Statistics for one strategy
    pub fn summary(&self, strategy: PivotStrategy) -> &SummaryStatistics {
        match strategy {
            PivotStrategy::Randomized => &self.randomized,
            PivotStrategy::Deterministic => &self.deterministic,
        }
    }
}

/// Compute statistics for sweep results (parallelized with Rayon)
///
/// The comparison uses the randomized strategy as baseline, so a speedup
/// above 1.0 means the deterministic strategy was slower.
pub fn compute_statistics(results: &[AggregateResult]) -> Vec<SizeStatistics> {
    results
        .par_iter()
        .map(|r| {
            let randomized = summarize_durations(&r.randomized_trials);
            let deterministic = summarize_durations(&r.deterministic_trials);

            for (strategy, stats) in [
                (PivotStrategy::Randomized, &randomized),
                (PivotStrategy::Deterministic, &deterministic),
            ] {
                if !stats.is_stable(NOISY_CV_THRESHOLD) {
                    tracing::warn!(
                        size = r.input_size,
                        %strategy,
                        cv = stats.coefficient_of_variation(),
                        "noisy measurement"
                    );
                }
            }

            let comparison = compare_trials(
                &seconds(&r.randomized_trials),
                &seconds(&r.deterministic_trials),
            )
            .ok();

            SizeStatistics {
                input_size: r.input_size,
                randomized,
                deterministic,
                comparison,
            }
        })
        .collect()
}

pub(crate) fn seconds(trials: &[std::time::Duration]) -> Vec<f64> {
    trials.iter().map(|d| d.as_secs_f64()).collect()
}
