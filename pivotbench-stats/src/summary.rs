//! Summary Statistics
//!
//! Describes the spread of a handful of trial durations. Every figure is
//! computed from ALL samples: the mean must stay the exact arithmetic mean
//! of the trials, so no outlier trimming is applied.

use crate::percentiles::percentile_of_sorted;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Summary of one (size, strategy) measurement, in seconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Arithmetic mean
    pub mean: f64,
    /// Median (linear interpolation for even counts)
    pub median: f64,
    /// Sample standard deviation (n - 1 denominator)
    pub std_dev: f64,
    /// Fastest trial
    pub min: f64,
    /// Slowest trial
    pub max: f64,
    /// Number of trials summarised
    pub sample_count: usize,
}

/// Compute summary statistics over samples (seconds)
pub fn compute_summary(samples: &[f64]) -> SummaryStatistics {
    if samples.is_empty() {
        return SummaryStatistics {
            mean: 0.0,
            median: 0.0,
            std_dev: 0.0,
            min: 0.0,
            max: 0.0,
            sample_count: 0,
        };
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;

    let std_dev = if n < 2 {
        0.0
    } else {
        let variance = sorted.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        variance.sqrt()
    };

    SummaryStatistics {
        mean,
        median: percentile_of_sorted(&sorted, 50.0),
        std_dev,
        min: sorted[0],
        max: sorted[n - 1],
        sample_count: n,
    }
}

/// Compute summary statistics over trial durations
pub fn summarize_durations(durations: &[Duration]) -> SummaryStatistics {
    let secs: Vec<f64> = durations.iter().map(Duration::as_secs_f64).collect();
    compute_summary(&secs)
}

impl SummaryStatistics {
    /// Coefficient of variation (relative stddev, percent)
    pub fn coefficient_of_variation(&self) -> f64 {
        if self.mean == 0.0 {
            0.0
        } else {
            (self.std_dev / self.mean) * 100.0
        }
    }

    /// Spread between slowest and fastest trial
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Check if trials look stable (low CV)
    pub fn is_stable(&self, cv_threshold: f64) -> bool {
        self.coefficient_of_variation() < cv_threshold
    }
}
