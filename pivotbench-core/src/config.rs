//! Sweep configuration passed explicitly to the runner

use crate::BenchError;
use serde::{Deserialize, Serialize};

/// Input sizes measured by a default sweep
pub const DEFAULT_SIZES: [usize; 4] = [10_000, 50_000, 100_000, 500_000];

/// Timed trials per (size, strategy) pair
pub const DEFAULT_TRIAL_COUNT: usize = 5;

/// Inclusive upper bound of generated values
pub const DEFAULT_MAX_VALUE: u64 = 1_000_000;

/// Configuration for one sweep. Fixed for the lifetime of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Input sizes in measurement order; duplicates are measured twice
    pub sizes: Vec<usize>,
    /// Timed trials per (size, strategy) pair
    pub trial_count: usize,
    /// Generated values are drawn from `0..=max_value`
    pub max_value: u64,
    /// Seed for input generation; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            trial_count: DEFAULT_TRIAL_COUNT,
            max_value: DEFAULT_MAX_VALUE,
            seed: None,
        }
    }
}

impl BenchmarkConfig {
    /// Check the configuration can drive a sweep
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.sizes.is_empty() {
            return Err(BenchError::NoSizes);
        }
        if self.trial_count == 0 {
            return Err(BenchError::NoTrials);
        }
        if u32::try_from(self.trial_count).is_err() {
            return Err(BenchError::TooManyTrials(self.trial_count));
        }
        Ok(())
    }

    /// Largest configured size (bounds peak working set per trial)
    pub fn max_size(&self) -> usize {
        self.sizes.iter().copied().max().unwrap_or(0)
    }
}
