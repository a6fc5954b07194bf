#![warn(missing_docs)]
//! PivotBench Statistical Engine
//!
//! Statistics over per-trial durations:
//! - Summary statistics (exact mean, median, sample std-dev, extremes)
//! - Interpolated percentiles
//! - Baseline vs candidate comparison with speedup and effect size

mod comparison;
mod percentiles;
mod summary;

pub use comparison::{ComparisonError, ComparisonResult, EffectInterpretation, compare_trials};
pub use percentiles::compute_percentile;
pub use summary::{SummaryStatistics, compute_summary, summarize_durations};

/// Coefficient of variation (percent) above which a measurement is flagged noisy
pub const NOISY_CV_THRESHOLD: f64 = 10.0;
