//! Report Building
//!
//! Constructs the complete report from sweep results.
//!
//! ## Pipeline
//!
//! ```text
//! AggregateResult + SizeStatistics
//!              │
//!              ▼
//!   ┌─────────────────────┐
//!   │   VariantMetrics    │  Per-strategy timing stats in seconds
//!   └──────────┬──────────┘
//!              │
//!              ▼
//!   ┌─────────────────────┐
//!   │      Report         │  Rows + chart data + summary
//!   └─────────────────────┘
//! ```

use super::metadata::build_report_meta;
use super::statistics::{SizeStatistics, seconds};
use pivotbench_core::{AggregateResult, BenchmarkConfig, PivotStrategy};
use pivotbench_report::{Report, ReportRow, VariantMetrics};

/// Build a complete Report from sweep results
///
/// # Arguments
/// * `results` - Sweep results, in sweep order
/// * `stats` - Statistics from `compute_statistics`, parallel with `results`
/// * `config` - Sweep configuration (captured in metadata)
/// * `total_duration_ms` - Wall time of the sweep in milliseconds
pub fn build_report(
    results: &[AggregateResult],
    stats: &[SizeStatistics],
    config: &BenchmarkConfig,
    total_duration_ms: f64,
) -> Report {
    let rows = results
        .iter()
        .zip(stats)
        .map(|(result, size_stats)| {
            debug_assert_eq!(result.input_size, size_stats.input_size);
            // Reported means are the runner's; the summaries only add dispersion
            let variant = |strategy: PivotStrategy| {
                VariantMetrics::new(
                    strategy,
                    result.mean(strategy).as_secs_f64(),
                    size_stats.summary(strategy),
                    seconds(result.trials(strategy)),
                )
            };
            let randomized = variant(PivotStrategy::Randomized);
            let deterministic = variant(PivotStrategy::Deterministic);
            let speedup =
                (randomized.mean_s > 0.0).then(|| deterministic.mean_s / randomized.mean_s);

            ReportRow {
                input_size: result.input_size,
                randomized,
                deterministic,
                speedup,
                effect: size_stats
                    .comparison
                    .as_ref()
                    .map(|c| c.effect_interpretation),
            }
        })
        .collect();

    Report::new(build_report_meta(config), rows, total_duration_ms)
}
