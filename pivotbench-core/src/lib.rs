#![warn(missing_docs)]
//! PivotBench Core - Sort Engine and Runner
//!
//! This crate provides the measured code and the harness around it:
//! - Randomized-pivot and last-element-pivot quicksort over any `Ord` data
//! - Monotonic trial timing behind a swappable `Clock`
//! - `BenchmarkRunner` for repeated trials, means and size sweeps

mod config;
mod error;
mod measure;
mod runner;
mod sort;

pub use config::{BenchmarkConfig, DEFAULT_MAX_VALUE, DEFAULT_SIZES, DEFAULT_TRIAL_COUNT};
pub use error::{BenchError, SortFailure};
pub use measure::{Clock, MonotonicClock, Timer};
pub use runner::{
    AggregateResult, BenchmarkRunner, Measurement, generate_input, generate_input_with,
    mean_duration,
};
pub use sort::{
    Partition, PivotStrategy, deterministic_quick_sort, partition, randomized_quick_sort, sort,
    sort_owned, sort_owned_with_rng, sort_with_rng,
};
