#![warn(missing_docs)]
//! # PivotBench
//!
//! Empirical comparison of two quicksort pivot strategies on random integer
//! inputs of increasing size.
//!
//! - **Randomized**: pivot drawn uniformly from the current run
//! - **Deterministic**: pivot is the last element of the current run
//!
//! Both strategies use a single-pass three-way partition and never mutate
//! their input. Each size is measured on one shared random input, with every
//! trial sorting a fresh copy and only the sort itself timed.
//!
//! ## Quick Start
//!
//! ```
//! use pivotbench::prelude::*;
//!
//! let sorted = sort(&[5, 3, 8, 3, 1], PivotStrategy::Randomized);
//! assert_eq!(sorted, vec![1, 3, 3, 5, 8]);
//! ```
//!
//! ## Running a Sweep
//!
//! ```ignore
//! use pivotbench::prelude::*;
//!
//! let config = BenchmarkConfig { sizes: vec![1_000, 5_000], ..Default::default() };
//! for result in BenchmarkRunner::new(config).run()? {
//!     println!("{} {:?} {:?}", result.input_size, result.mean_randomized, result.mean_deterministic);
//! }
//! ```

// Re-export core types
pub use pivotbench_core::{
    AggregateResult, BenchError, BenchmarkConfig, BenchmarkRunner, Clock, DEFAULT_MAX_VALUE,
    DEFAULT_SIZES, DEFAULT_TRIAL_COUNT, Measurement, MonotonicClock, Partition, PivotStrategy,
    SortFailure, Timer, deterministic_quick_sort, generate_input, generate_input_with,
    mean_duration, partition, randomized_quick_sort, sort, sort_owned, sort_owned_with_rng,
    sort_with_rng,
};

// Re-export stats
pub use pivotbench_stats::{
    ComparisonResult, EffectInterpretation, SummaryStatistics, compare_trials, compute_summary,
    summarize_durations,
};

// Re-export reporting
pub use pivotbench_report::{
    ChartData, OutputFormat, Report, ReportRow, generate_csv_report, generate_json_report,
    parse_json_report,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        AggregateResult, BenchmarkConfig, BenchmarkRunner, PivotStrategy,
        deterministic_quick_sort, randomized_quick_sort, sort,
    };
}

/// Run the PivotBench CLI.
///
/// ```ignore
/// fn main() {
///     pivotbench::run().unwrap();
/// }
/// ```
pub use pivotbench_cli::run;
