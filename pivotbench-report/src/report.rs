//! Report Data Structures

use crate::chart::ChartData;
use chrono::{DateTime, Utc};
use pivotbench_core::{BenchmarkConfig, PivotStrategy};
use pivotbench_stats::{EffectInterpretation, SummaryStatistics};
use serde::{Deserialize, Serialize};

/// Current JSON schema version
pub const SCHEMA_VERSION: u32 = 1;

/// Complete sweep report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub meta: ReportMeta,
    /// One row per measured size, in sweep order
    pub rows: Vec<ReportRow>,
    pub chart: ChartData,
    pub summary: ReportSummary,
}

impl Report {
    /// Assemble a report; chart data and summary are derived from `rows`
    pub fn new(meta: ReportMeta, rows: Vec<ReportRow>, total_duration_ms: f64) -> Self {
        let chart = ChartData::from_rows(&rows);
        let summary = ReportSummary::from_rows(&rows, total_duration_ms);
        Self {
            meta,
            rows,
            chart,
            summary,
        }
    }
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    pub schema_version: u32,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub system: SystemInfo,
    pub config: ReportConfig,
}

/// Sweep configuration captured in report metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub sizes: Vec<usize>,
    pub trial_count: usize,
    pub max_value: u64,
    pub seed: Option<u64>,
}

impl From<&BenchmarkConfig> for ReportConfig {
    fn from(config: &BenchmarkConfig) -> Self {
        Self {
            sizes: config.sizes.clone(),
            trial_count: config.trial_count,
            max_value: config.max_value,
            seed: config.seed,
        }
    }
}

/// System information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    pub os: String,
    pub arch: String,
    pub cpu_cores: u32,
}

impl SystemInfo {
    /// Describe the machine running this process
    pub fn current() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            cpu_cores: std::thread::available_parallelism()
                .map(|n| n.get() as u32)
                .unwrap_or(1),
        }
    }
}

/// Timing metrics for one strategy at one size, in seconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantMetrics {
    pub strategy: PivotStrategy,
    pub mean_s: f64,
    pub median_s: f64,
    pub std_dev_s: f64,
    pub min_s: f64,
    pub max_s: f64,
    pub cv_percent: f64,
    /// Raw trial durations in trial order
    pub trials_s: Vec<f64>,
}

impl VariantMetrics {
    /// Build metrics from the runner's measured mean, plus summary
    /// statistics for the dispersion of the raw trials
    pub fn new(
        strategy: PivotStrategy,
        mean_s: f64,
        stats: &SummaryStatistics,
        trials_s: Vec<f64>,
    ) -> Self {
        Self {
            strategy,
            mean_s,
            median_s: stats.median,
            std_dev_s: stats.std_dev,
            min_s: stats.min,
            max_s: stats.max,
            cv_percent: stats.coefficient_of_variation(),
            trials_s,
        }
    }
}

/// One measured input size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub input_size: usize,
    pub randomized: VariantMetrics,
    pub deterministic: VariantMetrics,
    /// deterministic mean / randomized mean; `None` when the randomized
    /// mean rounds to zero
    pub speedup: Option<f64>,
    pub effect: Option<EffectInterpretation>,
}

impl ReportRow {
    /// Metrics for one strategy
    pub fn variant(&self, strategy: PivotStrategy) -> &VariantMetrics {
        match strategy {
            PivotStrategy::Randomized => &self.randomized,
            PivotStrategy::Deterministic => &self.deterministic,
        }
    }
}

/// Report summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub sizes_measured: usize,
    pub total_trials: usize,
    /// Sizes where the deterministic strategy had the higher mean
    pub deterministic_slower: usize,
    /// Largest speedup observed, if any ratio was defined
    pub max_speedup: Option<f64>,
    pub total_duration_ms: f64,
}

impl ReportSummary {
    /// Summarise report rows
    pub fn from_rows(rows: &[ReportRow], total_duration_ms: f64) -> Self {
        Self {
            sizes_measured: rows.len(),
            total_trials: rows
                .iter()
                .map(|r| r.randomized.trials_s.len() + r.deterministic.trials_s.len())
                .sum(),
            deterministic_slower: rows
                .iter()
                .filter(|r| r.deterministic.mean_s > r.randomized.mean_s)
                .count(),
            max_speedup: rows.iter().filter_map(|r| r.speedup).reduce(f64::max),
            total_duration_ms,
        }
    }
}
